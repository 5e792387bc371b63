use std::io::{self, Write};
use std::process::exit;

use simplx::io::{TokenReader, read_problem};
use simplx::{LpContext, LpError, Status};

const NOT_APPLICABLE: &str = "The method is not applicable!";

fn run() -> Result<(), LpError> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some((problem, options)) = read_problem::<f64, _, _>(&mut reader, &mut out)? else {
        writeln!(out, "{}", NOT_APPLICABLE)?;
        return Ok(());
    };
    write!(out, "{}", problem)?;

    let solution = LpContext::new(problem).with_options(options).solve()?;
    match (solution.status, solution.values) {
        (Status::Solved, Some(values)) => {
            let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            writeln!(out, "The vector of decision variables: ({})", joined.join(", "))?;
            writeln!(out, "Maximum value of objective function: {}", solution.objective)?;
        }
        (status, _) => {
            log::info!("solver stopped with {:?}", status);
            writeln!(out, "{}", NOT_APPLICABLE)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        exit(1);
    }
}
