//! Web server command.

use console::style;

use crate::config::Settings;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = match bind {
        Some(bind) => parse_bind_address(bind, settings),
        None => (settings.host.clone(), settings.port),
    };

    println!(
        "{} Starting animirror at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!(
        "  {} mirror candidate(s), primary {}",
        settings.site.candidates().len(),
        style(&settings.site.base).bold()
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> configured host, port 3030
/// - Just a host: "127.0.0.1" -> 127.0.0.1, configured port
/// - Host and port: "127.0.0.1:3030"
fn parse_bind_address(bind: &str, settings: &Settings) -> (String, u16) {
    if let Ok(port) = bind.parse::<u16>() {
        return (settings.host.clone(), port);
    }

    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return (host.to_string(), port);
        }
    }

    (bind.to_string(), settings.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address() {
        let settings = Settings::default();

        assert_eq!(
            parse_bind_address("8080", &settings),
            ("0.0.0.0".to_string(), 8080)
        );
        assert_eq!(
            parse_bind_address("127.0.0.1", &settings),
            ("127.0.0.1".to_string(), 3001)
        );
        assert_eq!(
            parse_bind_address("localhost:9000", &settings),
            ("localhost".to_string(), 9000)
        );
    }
}
