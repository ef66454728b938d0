//! Thin binary that starts the cache-fronted HTTP facade on a fixed
//! address.

use std::net::SocketAddr;

use env_logger::Env;

#[tokio::main]
async fn main() {
    env_logger::from_env(Env::default().default_filter_or("info")).init();

    let addr: SocketAddr = "0.0.0.0:8080".parse().expect("hardcoded address");
    if let Err(e) = linkschkr::webserver::serve(addr).await {
        log::error!("linksws: {}", e);
        std::process::exit(1);
    }
}
