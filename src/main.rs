fn main() -> std::io::Result<()> {
    datasweep::run()
}
