use clap::{Arg, Command};
use std::sync::Arc;
use telugu_lipi::{
    Pipeline, ProcessingMode, RemoteOcrProvider, SampleMode, SampleRecognizer, TextRecognizer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("lipi")
        .version("0.1.0")
        .about("Telugu text digitization: recognize, translate and summarize")
        .arg(
            Arg::new("image")
                .help("Path to a PNG/JPEG image of Telugu text")
                .index(1),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Processing mode: digitize, translate or summarize")
                .default_value("summarize"),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .short('t')
                .help("Process raw Telugu text directly, skipping recognition"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .short('s')
                .help("Use the built-in sample recognizer instead of the remote service")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result record as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show processing details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let mode: ProcessingMode = matches.get_one::<String>("mode").unwrap().parse()?;
    let use_sample = matches.get_flag("sample");
    let as_json = matches.get_flag("json");
    let verbose = matches.get_flag("verbose");

    // Raw-text input needs no recognition backend
    if let Some(text) = matches.get_one::<String>("text") {
        let pipeline = Pipeline::new(Arc::new(SampleRecognizer::new(SampleMode::Rotate)));
        if verbose {
            println!("📝 Input: \"{}\"", text);
            println!("⚙️  Mode: {}", mode.as_str());
            println!();
        }
        let result = pipeline.process_text(text, mode)?;
        print_result(&result, as_json)?;
        return Ok(());
    }

    let Some(image_path) = matches.get_one::<String>("image") else {
        eprintln!("❌ Provide an image path or use --text");
        return Err("Missing input".into());
    };

    let recognizer: Arc<dyn TextRecognizer> = if use_sample {
        Arc::new(SampleRecognizer::new(SampleMode::Rotate))
    } else {
        if std::env::var("LIPI_OCR_ENDPOINT").is_err() {
            eprintln!("❌ LIPI_OCR_ENDPOINT environment variable not set");
            eprintln!("   Set it with: export LIPI_OCR_ENDPOINT=http://host:port/recognize");
            eprintln!("   Or use --sample to run against the built-in corpus");
            return Err("Missing recognition endpoint".into());
        }
        Arc::new(RemoteOcrProvider::from_env()?)
    };

    let image = std::fs::read(image_path)?;

    if verbose {
        println!("📷 Image: {} ({} bytes)", image_path, image.len());
        println!("🔎 Backend: {}", recognizer.recognizer_name());
        println!("⚙️  Mode: {}", mode.as_str());
        println!();
    }

    let pipeline = Pipeline::new(recognizer);
    let result = pipeline.process_image(&image, mode).await?;
    print_result(&result, as_json)?;

    Ok(())
}

fn print_result(
    result: &telugu_lipi::ProcessingResult,
    as_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("📝 Original:\n{}", result.original_text);
    if let Some(translated) = &result.translated_text {
        println!();
        println!("🌍 Translation:\n{}", translated);
    }
    if let Some(summary) = &result.english_summary {
        println!();
        println!("📄 English summary:\n{}", summary);
    }
    if let Some(summary) = &result.telugu_summary {
        println!();
        println!("📄 Telugu summary:\n{}", summary);
    }
    if let Some(url) = &result.external_translation_url {
        println!();
        println!("🔗 Full translation: {}", url);
    }

    Ok(())
}
