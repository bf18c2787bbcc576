use actix_casbin_auth::{casbin::DefaultModel, CasbinService};
use sqlx_adapter::SqlxAdapter;
use std::io::{Error, ErrorKind};

/// Role based access on `(role, path, method)`; model in `access_control.conf`,
/// policies in the `casbin_rule` table.
pub async fn try_new(db_connection_address: String) -> Result<CasbinService, Error> {
    let m = DefaultModel::from_file("access_control.conf")
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("{err:?}")))?;
    let a = SqlxAdapter::new(db_connection_address, 8)
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("{err:?}")))?;

    let casbin_service = CasbinService::new(m, a)
        .await
        .map_err(|err| Error::new(ErrorKind::Other, format!("{err:?}")))?;

    tracing::debug!("Casbin policies loaded");

    Ok(casbin_service)
}
