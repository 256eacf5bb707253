use recvone::{OneshotListener, Result};
use slog::{o, Drain};
use std::net::SocketAddr;
use structopt::StructOpt;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let opt = ListenerCliOpt::from_args();

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let logger = slog::Logger::root(drain, o!());

    let listener = OneshotListener::bind(opt.listen_addr, Some(logger))?;
    println!("Waiting for connection");

    let conn = listener.accept()?;
    println!("Connected");

    let payload = conn.recv_utf8()?;
    println!("{}", payload);
    Ok(())
}

#[derive(StructOpt)]
#[structopt(
    name = "recvone",
    about = "Accepts one TCP connection, prints the received message, then exits"
)]
struct ListenerCliOpt {
    /// IP address and port to listen on
    #[structopt(long = "addr", default_value = "127.0.0.1:65432")]
    listen_addr: SocketAddr,
}
