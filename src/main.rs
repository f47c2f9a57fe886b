fn main() -> std::io::Result<()> {
    plum_rules::protocol::xboard::run_stdio_loop()
}
