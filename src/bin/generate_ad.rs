use std::env;

use ugc_ad_studio::catalog::{find_voice, AVATAR_GROUPS};
use ugc_ad_studio::config::DEFAULT_PUBLIC_BASE_URL;
use ugc_ad_studio::studio::{HttpVideoBackend, StudioSession, StudioView};

// Usage: generate_ad "<script>" <avatar path> [voice id]
//   e.g. generate_ad "Best coffee I've had all year" /avatars/male/male1.jpg en-US-GuyNeural
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        println!("Usage: generate_ad \"<script>\" <avatar path> [voice id]");
        println!("\nAvatars:");
        for group in AVATAR_GROUPS {
            for asset in group.assets {
                println!("  {:<10} {}", group.label, asset);
            }
        }
        std::process::exit(2);
    }

    let server_url = env::var("UGC_SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let base_url = env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string());

    let mut session = StudioSession::new(base_url);
    session.set_script(args[0].clone());
    if let Some(avatar) = args.get(1) {
        session.select_avatar(avatar.clone());
    }
    if let Some(voice) = args.get(2) {
        match find_voice(voice) {
            Some(option) => println!("Voice: {}", option.label),
            None => println!("Voice: {} (not in the stock list)", voice),
        }
        session.select_voice(voice.clone());
    }

    println!("Generating video via {} ...", server_url);
    let backend = HttpVideoBackend::new(&server_url);

    let outcome = session.submit(&backend).await.map(|_| ());
    match outcome {
        Ok(()) => {
            println!("{}", session.view());
            if let StudioView::Result(result) = session.view() {
                println!("Received at {}", result.received_at.format("%Y-%m-%d %H:%M:%S UTC"));
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
