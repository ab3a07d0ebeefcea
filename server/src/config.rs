use error_stack::ResultExt;
use kernel::KernelError;
use std::net::SocketAddr;

static SERVER_PORT: &str = "SERVER_PORT";
const DEFAULT_PORT: u16 = 8080;

/// Listen on every interface, at `SERVER_PORT` or 8080.
pub fn bind_address() -> error_stack::Result<SocketAddr, KernelError> {
    let port = match dotenvy::var(SERVER_PORT) {
        Ok(port) => parse_port(&port)?,
        Err(_) => DEFAULT_PORT,
    };
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

fn parse_port(port: &str) -> error_stack::Result<u16, KernelError> {
    port.trim()
        .parse::<u16>()
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("{} must be a port number, got {:?}", SERVER_PORT, port))
}

#[cfg(test)]
mod test {
    use super::parse_port;

    #[test]
    fn parses_valid_ports() {
        assert_eq!(parse_port("3000").ok(), Some(3000));
        assert_eq!(parse_port(" 8081\n").ok(), Some(8081));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_port("eighty").is_err());
        assert!(parse_port("70000").is_err());
    }
}
