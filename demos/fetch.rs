//! Fetches a URL and prints the validated response.
//!
//! ```text
//! RUST_LOG=urequest=debug cargo run --example fetch -- httpbin.org get
//! RUST_LOG=urequest=debug cargo run --example fetch -- httpbin.org basic-auth/user/pass user pass
//! ```
use urequest::{Credentials, HttpSession, HttpsUrl, LoggedHttpSession, Response, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "httpbin.org".to_string());
    let path = args.next().unwrap_or_default();
    let url = HttpsUrl::new(host, path);

    let mut session: Box<dyn Session> = match (args.next(), args.next()) {
        (Some(user), Some(pass)) => Box::new(LoggedHttpSession::new(Credentials::new(user, pass))?),
        _ => Box::new(HttpSession::new()?),
    };

    let res = session.get(&url)?;
    println!("{} {}", res.status(), url);
    match res.as_json() {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{res}"),
    }

    session.close();
    Ok(())
}
