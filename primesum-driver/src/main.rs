use primesum_driver::Driver;

fn main() {
    human_panic::setup_panic!();

    let mut builder = env_logger::Builder::from_env("PRIMESUM_LOG");
    builder.format_indent(Some(2));
    builder.format_timestamp(None);
    builder.init();

    let stdout = std::io::stdout();
    if let Err(e) = Driver::run(std::env::args_os(), &mut stdout.lock()) {
        // clap renders its own usage and help text
        if let Some(err) = e.downcast_ref::<clap::Error>() {
            err.exit();
        }
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
