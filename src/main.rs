use mazecarve::{
    app::{self, App, TerminalSession},
    config::Config,
    error::{MazeError, Result},
    logging,
};

const USAGE: &str = "\
Usage:
  mazecarve                              interactive terminal viewer
  mazecarve --print WIDTH HEIGHT [SEED]  print one maze and its solution

Environment:
  MAZECARVE_SEED       seed for reproducible mazes
  MAZECARVE_LOG        log level (trace, debug, info, warn, error)
  MAZECARVE_LOG_DIR    directory for log files (default: logs)
  MAZECARVE_CELL_SIZE  pixel cell size for the `profile` binary (1-1024, default: 11);
                       the terminal viewer always uses one terminal cell per maze cell";

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config);
    tracing::info!("[main] starting with {:?}", config);

    let mut args = std::env::args();
    args.next(); // Skip executable name
    match args.next().as_deref() {
        None => {
            let mut session = TerminalSession::enter()?;
            App::new(config).run(session.stdout())
        }
        Some("--print") => app::print::run(&config, &args.collect::<Vec<_>>()),
        Some("-h" | "--help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => {
            eprintln!("{}", USAGE);
            Err(MazeError::InvalidArgument(format!(
                "unknown argument {:?}",
                other
            )))
        }
    }
}
