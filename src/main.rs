fn main() -> anyhow::Result<()> {
    zsh_history_cleaner::cli::run()
}
