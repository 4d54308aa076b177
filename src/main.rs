use anyhow::Result;
use heron_commands::executor::{ExecutionResult, RuntimeExecutor};
use heron_commands::Router;
use heron_utils::term::{print_detail, print_error, print_info};
use std::process;
use tracing_subscriber::filter::LevelFilter;

fn tracing(level: LevelFilter) {
    tracing_subscriber::fmt().with_max_level(level).init()
}

fn report(result: &ExecutionResult) -> Result<()> {
    if result.is_success() {
        print_info(&result.message)?;
    } else {
        print_error(&result.message)?;
    }
    if let Some(detail) = &result.detail {
        print_detail(detail)?;
    }
    Ok(())
}

fn run(router: &Router) -> Result<ExecutionResult> {
    let cli = router.interface()?;
    let matches = cli.clone().get_matches();

    tracing(Router::tracing_level(&matches)?);

    let result = router.dispatch(&RuntimeExecutor, &cli, &matches)?;
    report(&result)?;
    Ok(result)
}

fn main() {
    let router = Router::new();

    let code = match run(&router) {
        Ok(result) => result.status.exit_code(),
        Err(e) => {
            if let Err(e) = print_error(&e.to_string()) {
                eprintln!("{e}");
            }
            1
        }
    };

    process::exit(code)
}
