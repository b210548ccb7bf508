use std::{
    env, io,
    net::{AddrParseError, SocketAddr, TcpListener},
};

use dotenvy;
use socket2::{Domain, Protocol, Socket, Type};

use crate::constants::{DEFAULT_IP, DEFAULT_PORT};

const BACKLOG: i32 = 128;

pub fn server_address() -> Result<SocketAddr, AddrParseError> {
    dotenvy::dotenv().ok();

    let ip = env::var("IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
    let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

    parse_address(&ip, &port)
}

pub fn parse_address(ip: &str, port: &str) -> Result<SocketAddr, AddrParseError> {
    let address_string = if ip.contains(':') {
        format!("[{}]:{}", ip, port)
    } else {
        format!("{}:{}", ip, port)
    };
    address_string.parse()
}

/// Binds a non-blocking TCP listener with `SO_REUSEADDR`, ready to hand to an
/// async runtime.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}
