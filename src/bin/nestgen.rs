use nestgen::cli;

fn main() -> anyhow::Result<()> {
    cli::run_cli()
}
