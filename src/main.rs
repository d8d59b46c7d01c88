fn main() -> anyhow::Result<()> {
    pulse::app::run()
}
