//! Client construction.

use portico_core::{ConnectOption, compose};
use tracing::info;

use crate::config::profile;
use crate::error::RedisResult;
use crate::target::project_target;

/// Compose the options, project them onto the native shape, and open a
/// `redis` client. Opening performs no I/O; the driver connects lazily.
/// Driver errors are returned unchanged.
pub fn connect(options: &[ConnectOption]) -> RedisResult<redis::Client> {
    let draft = compose(&profile(), options);
    let target = project_target(&draft)?;

    let client = redis::Client::open(target.to_connection_info())?;

    info!(addr = %target.addr, db = target.db, "Redis client created");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{with_database, with_host};

    #[test]
    fn test_connect_builds_client() {
        let client = connect(&[with_host("localhost:6379"), with_database(1)]).unwrap();
        let info = client.get_connection_info();
        assert_eq!(info.redis.db, 1);
    }
}
