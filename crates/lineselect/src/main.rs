use clap::Parser;

fn main() -> anyhow::Result<()> {
    lineselect::init();

    let cli = lineselect::cli::Cli::parse();
    lineselect::run(cli)
}
