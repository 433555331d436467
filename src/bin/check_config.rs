use persona_lens::AppConfig;
use persona_lens::Result;

fn main() -> Result<()> {
    println!("🔍 Checking configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("✅ Configuration loaded successfully!");
            println!("📋 Configuration details:");
            println!("  Log level: {}", config.log_level());
            println!(
                "  Log directory: {}",
                config.log_directory().unwrap_or("(stderr only)")
            );
            println!("  Max posts per batch: {}", config.max_posts());

            // A default target that is not in the catalog only fails later in `gap`
            match persona_lens::find_target(config.default_target()) {
                Ok(target) => println!("  Default target: {} ({})", target.id, target.name),
                Err(e) => {
                    println!("❌ {e}");
                    return Err(e);
                }
            }

            println!("\n🎉 Configuration check completed successfully!");
        }
        Err(e) => {
            println!("❌ Configuration error: {}", e);
            println!("\n💡 To fix this:");
            println!("  1. Copy config.example.toml to persona-lens.toml");
            println!("  2. Edit persona-lens.toml");
            println!("  3. Run this check again");
            return Err(e);
        }
    }

    Ok(())
}
