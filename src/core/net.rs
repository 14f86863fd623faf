// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). The link file carries absolute URLs to
// whatever host published the scoresheets, so the full URL is parsed here.

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::error::{Error, Result};

/// Split "http://host[:port]/path" into (host, port, path).
fn split_url(url: &str) -> Result<(&str, u16, &str)> {
    let rest = url
        .strip_prefix("http://")
        .ok_or_else(|| Error::BadUrl(format!("only http:// urls are supported: {url}")))?;

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match authority.rfind(':') {
        Some(i) => {
            let port = authority[i + 1..]
                .parse::<u16>()
                .map_err(|_| Error::BadUrl(format!("bad port in {url}")))?;
            (&authority[..i], port)
        }
        None => (authority, 80),
    };
    if host.is_empty() {
        return Err(Error::BadUrl(s!(url)));
    }
    Ok((host, port, path))
}

pub fn http_get(url: &str) -> Result<String> {
    let (host, port, path) = split_url(url.trim())?;

    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: pin_scrape/0.3\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(Error::Http(format!("{} for {}", status, url)));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| Error::Http(format!("malformed response from {host}")))?
        + 4;
    Ok(resp[body_idx..].to_string())
}
