use clap::Parser;
use dream_weaver::{
    logger::{self, LoggerConfig},
    models::{GalleryItem, OptionField, SubmitMode},
    Config, HttpImageClient, RequestController, SlotPage, SubmitOutcome,
};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(
    name = "dream-weaver",
    version,
    about = "Generate images from a prompt with the Dream Weaver service"
)]
struct Args {
    /// Send the selected options along with the prompt.
    #[arg(long)]
    options: bool,
    /// Select an option as key=value; implies --options.
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    option: Vec<(OptionField, String)>,
    /// Prompt words, joined with single spaces.
    prompt: Vec<String>,
}

impl Args {
    fn mode(&self) -> SubmitMode {
        if self.options || !self.option.is_empty() {
            SubmitMode::WithOptions
        } else {
            SubmitMode::Plain
        }
    }

    fn page(&self) -> SlotPage {
        let mut page = SlotPage::new();
        page.set_prompt(self.prompt.join(" "));
        for (field, value) in &self.option {
            page.select(*field, value.clone());
        }
        page
    }
}

fn parse_option(pair: &str) -> Result<(OptionField, String), String> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", pair))?;
    let field = OptionField::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = OptionField::ALL.iter().map(|f| f.key()).collect();
        format!(
            "unknown option '{}' (expected one of: {})",
            key,
            known.join(", ")
        )
    })?;
    Ok((field, value.to_string()))
}

fn print_item(item: &GalleryItem, output_dir: &Path) {
    let info = &item.info;
    println!("🖼️  {}", item.alt_text());
    println!("   Seed: {}", info.seed_display());
    println!("   Steps: {}", info.steps_display());
    println!("   Sampler: {}", info.sampler_display());
    println!("   CFG Scale: {}", info.cfg_scale_display());
    println!("   Dimensions: {}", info.dimensions_display());

    match item.save_to(output_dir) {
        Ok(path) => println!("   💾 Saved to {}", path.display()),
        Err(e) => log::error!("❌ Failed to save {}: {}", item.download_filename, e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(LoggerConfig::for_app(&config))?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }
    logger::log_config_info(&config);

    let client = HttpImageClient::new(&config.client)?;
    let controller = RequestController::new(Arc::new(client), args.page());

    match controller.submit(args.mode()).await {
        SubmitOutcome::Rendered { images } => {
            let state = controller.state();
            if let Some(prompt) = &state.expanded_prompt {
                println!("✨ Expanded prompt:\n{}\n", prompt);
            }

            let output_dir = Path::new(config.output_dir());
            std::fs::create_dir_all(output_dir)?;
            for item in &state.gallery {
                print_item(item, output_dir);
            }
            log::info!("🎉 {} image(s) generated", images);
            Ok(())
        }
        _ => {
            let message = controller
                .with_view(|page| page.error.clone())
                .unwrap_or_else(|| "Request did not complete".to_string());
            eprintln!("{}", message);
            std::process::exit(1);
        }
    }
}
