use colored::Colorize;
use dns_probs::bdns::problem_details_from_lookup_err;
use dns_probs::conf::Conf;
use dns_probs::shared::log::{init_log, set_max_level};
use std::{env, process};

fn main() {
    init_log();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        print_usage();
        process::exit(1);
    }

    let conf = match Conf::from_file(&args[1]) {
        Ok(conf) => {
            set_max_level(conf.log_level);
            log::debug!("Parsed configuration: {:?}.", conf);
            conf
        }
        Err(err) => {
            log::error!("Parsing configuration file: {}", err);
            process::exit(1);
        }
    };

    for (i, failure) in conf.failures.iter().enumerate() {
        let lookup_err = failure.to_lookup_err();
        let problem = problem_details_from_lookup_err(&lookup_err);
        log::info!("[{}] {} -> {}", i, lookup_err, problem);
    }
}

fn print_usage() {
    log::error!(
        "One argument should be provided: the path of the configuration file.
Usage: {} {}",
        "path/to/dns-probs".bold(),
        "path/to/config/file".bold().bright_green()
    )
}
