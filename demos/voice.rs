use std::io::Write;
use std::sync::{Arc, Mutex};

use clap::Parser;
use cpal::traits::{DeviceTrait, StreamTrait};
use secrecy::ExposeSecret;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use voxtral_chat::types::audio::{AudioClip, AudioFormat};
use voxtral_chat::types::Session;
use voxtral_chat::{Client, Config};
use voxtral_chat_utils as utils;

#[derive(Parser)]
#[command(about = "Hold a spoken conversation with Voxtral from the microphone")]
struct Args {
    /// Capture device name (defaults to the system input)
    #[arg(short, long)]
    device: Option<String>,

    /// Override the model name
    #[arg(short, long)]
    model: Option<String>,

    /// Print the raw response JSON after each exchange
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    let args = Args::parse();

    let mut builder = Config::builder();
    if let Some(model) = &args.model {
        builder = builder.with_model(model);
    }
    if std::env::var("MISTRAL_API_KEY").unwrap_or_default().is_empty() {
        builder = builder.with_api_key(&prompt("Mistral API key: ")?);
    }
    let config = builder.build();
    anyhow::ensure!(
        !config.api_key().expose_secret().is_empty(),
        "no API key given"
    );

    let client = Client::new(config);
    let mut session = Session::new();

    let input = utils::device::get_or_default_input(args.device.clone())?;
    let input_config = input.default_input_config()?;
    println!(
        "input: device={:?}, config={:?}",
        input.name()?,
        input_config
    );
    let channels = input_config.channels() as usize;
    let sample_rate = input_config.sample_rate().0;
    let stream_config = input_config.config();

    let mut reply_index = 0usize;
    loop {
        let line = prompt("\nPress Enter to record (q to quit): ")?;
        if line == "q" {
            break;
        }

        let samples = record_clip(&input, &stream_config)?;
        if samples.is_empty() {
            println!("heard nothing, try again");
            continue;
        }
        let mono = utils::audio::downmix_to_mono(&samples, channels);
        let wav = utils::audio::wav_from_samples(&mono, sample_rate)?;
        let clip = AudioClip::new(wav, AudioFormat::Wav);
        println!("recorded {} bytes", clip.len());

        let text = prompt("Optional question (Enter to skip): ")?;
        let text = (!text.is_empty()).then_some(text);

        // Every failure here is recoverable: report it and keep the session
        // going.
        match client.exchange(&mut session, &clip, text.as_deref()).await {
            Ok(turn) => {
                if let Some(reply) = turn.text() {
                    println!("Voxtral: {reply}");
                }
                if let Some(audio) = turn.audio() {
                    reply_index += 1;
                    let path = format!("reply-{reply_index}.mp3");
                    std::fs::write(&path, audio)?;
                    println!("reply audio written to {path}");
                }
                if args.debug {
                    if let Some(raw) = session.last_raw_response() {
                        println!("{}", serde_json::to_string_pretty(raw)?);
                    }
                }
            }
            Err(e) => eprintln!("exchange failed: {e}"),
        }
    }

    println!("{} turns this session", session.turns().len());
    Ok(())
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn record_clip(input: &cpal::Device, config: &cpal::StreamConfig) -> anyhow::Result<Vec<f32>> {
    let samples = Arc::new(Mutex::new(Vec::new()));

    let sink = samples.clone();
    let stream = input.build_input_stream(
        config,
        move |data: &[f32], _: &cpal::InputCallbackInfo| {
            if let Ok(mut sink) = sink.lock() {
                sink.extend_from_slice(data);
            }
        },
        move |err| eprintln!("an error occurred on input stream: {}", err),
        None,
    )?;
    stream.play()?;

    println!("Recording... press Enter to stop");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    drop(stream);

    let samples = samples.lock().expect("capture buffer poisoned").clone();
    Ok(samples)
}
