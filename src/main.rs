fn main() -> Result<(), Box<dyn std::error::Error>> {
    insight_scout::cli::main()
}
