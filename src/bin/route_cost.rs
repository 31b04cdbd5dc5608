use route_cost::RouteService;
use std::env;
use std::fs;
use std::process;

fn usage() -> ! {
    eprintln!("usage: route_cost <graph-file> <source> [--strict]");
    process::exit(2);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let strict = args.iter().any(|arg| arg == "--strict");
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();
    let (path, source) = match positional.as_slice() {
        [path, source] => (path.as_str(), source.as_str()),
        _ => usage(),
    };

    let bytes = fs::read(path)?;
    let service = RouteService::new().with_strict(strict);
    let report = service.find_routes(Some(bytes.as_slice()), source)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
