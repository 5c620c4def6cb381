use clap::Parser;
use secrecy::ExposeSecret;
use voxtral_chat::types::audio::{AudioClip, AudioFormat};
use voxtral_chat::types::Session;
use voxtral_chat::{Client, Config};

#[derive(Parser)]
#[command(about = "Send a recorded clip to Voxtral and print the reply")]
struct Args {
    /// Path to the clip to send
    clip: std::path::PathBuf,

    /// Optional extra question to send alongside the audio
    #[arg(short, long)]
    text: Option<String>,

    /// Declared format of the clip: wav or webm
    #[arg(short, long, default_value = "wav")]
    format: AudioFormat,

    /// Where to write the reply audio, if the model returns any
    #[arg(short, long, default_value = "reply.mp3")]
    out: std::path::PathBuf,

    /// Override the model name
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder();
    if let Some(model) = &args.model {
        builder = builder.with_model(model);
    }
    if std::env::var("MISTRAL_API_KEY").unwrap_or_default().is_empty() {
        builder = builder.with_api_key(&prompt_api_key()?);
    }
    let config = builder.build();
    anyhow::ensure!(
        !config.api_key().expose_secret().is_empty(),
        "no API key given"
    );

    let bytes = std::fs::read(&args.clip)?;
    let clip = AudioClip::new(bytes, args.format);
    println!("sending {} bytes of {} audio", clip.len(), clip.format());

    let client = Client::new(config);
    let mut session = Session::new();
    let turn = client
        .exchange(&mut session, &clip, args.text.as_deref())
        .await?;

    match turn.text() {
        Some(text) => println!("Voxtral: {text}"),
        None => println!("Voxtral sent no text back"),
    }
    if let Some(audio) = turn.audio() {
        std::fs::write(&args.out, audio)?;
        println!("reply audio written to {}", args.out.display());
    }

    Ok(())
}

fn prompt_api_key() -> anyhow::Result<String> {
    use std::io::Write;
    print!("Mistral API key: ");
    std::io::stdout().flush()?;
    let mut key = String::new();
    std::io::stdin().read_line(&mut key)?;
    Ok(key.trim().to_string())
}
