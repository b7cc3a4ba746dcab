use clap::Parser;

use ft8_codec::components::{crc12, ldpc, symbol_map};
use ft8_codec::verify_ft8;
use ft8_config::{ToneFormat, ToolConfig, toml_config};
use ft8_core::{BitBuffer, COSTAS_LEN, FT8_ND_HALF, LDPC_N, LDPC_N_BYTES, MessageType, PAYLOAD_BYTES, Payload, ToneSeq, debug};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "FT8 tone sequence encoder",
    long_about = "Encodes a packed 72-bit payload and a 3-bit message type into the 79 FT8 channel tones"
)]
struct Args {
    /// Packed payload
    #[arg(help = "Payload as 18 hex digits (72 bits, MSB first)")]
    payload: String,

    #[arg(short = 'i', long = "i3", default_value_t = 0, help = "Message type i3 [ 0..7 ]")]
    i3: u8,

    #[arg(short = 'c', long = "config", help = "Optional TOML config with output settings")]
    config: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Log every encoding stage to stdout")]
    verbose: bool,
}

fn load_config(path: Option<&str>) -> ToolConfig {
    let Some(path) = path else {
        return ToolConfig::default();
    };
    match toml_config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

fn parse_payload(payload_hex: &str) -> Payload {
    let bytes = match hex::decode(payload_hex.trim()) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: payload is not valid hex: {}", e);
            std::process::exit(1);
        }
    };
    if bytes.len() != PAYLOAD_BYTES {
        eprintln!("Error: payload must be {} bytes ({} hex digits), got {}", PAYLOAD_BYTES, PAYLOAD_BYTES * 2, bytes.len());
        std::process::exit(1);
    }
    let mut payload = [0u8; PAYLOAD_BYTES];
    payload.copy_from_slice(&bytes);
    payload
}

fn format_tones(tones: &ToneSeq, format: ToneFormat) -> String {
    match format {
        ToneFormat::Digits => symbol_map::tones_to_digits(tones),
        ToneFormat::Spaced => {
            // S7 | D29 | S7 | D29 | S7
            let mut blocks = Vec::with_capacity(5);
            let mut start = 0;
            for len in [COSTAS_LEN, FT8_ND_HALF, COSTAS_LEN, FT8_ND_HALF, COSTAS_LEN] {
                let block: Vec<String> = tones[start..start + len].iter().map(|t| t.to_string()).collect();
                blocks.push(block.join(" "));
                start += len;
            }
            blocks.join(" | ")
        }
    }
}

fn main() {
    eprintln!("[+] FT8 tone encoder");

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref());
    let _log_guard = if args.verbose {
        debug::setup_logging_verbose_with_logfile(cfg.debug_log.clone())
    } else {
        debug::setup_logging_default(cfg.debug_log.clone())
    };

    let payload = parse_payload(&args.payload);
    let i3 = match MessageType::new(args.i3) {
        Ok(i3) => i3,
        Err(e) => {
            eprintln!("Error: invalid i3 {}: {:?}", args.i3, e);
            std::process::exit(1);
        }
    };
    tracing::debug!("encoding payload {} i3 {}", args.payload, i3.into_raw());

    // Run the stages one by one so intermediate words can be shown
    let a87 = crc12::add_crc(&payload, i3);
    let codeword = ldpc::encode174(&a87);
    let tones = symbol_map::codeword_to_tones(&codeword);

    if cfg.output.show_info_word {
        println!("info word: {} (crc {:03X})", hex::encode_upper(a87), crc12::extract_crc(&a87));
    }
    if cfg.output.show_codeword {
        let bits = BitBuffer::<LDPC_N_BYTES>::from_bytes(&codeword, LDPC_N);
        println!("codeword:  {}", bits.dump_hex());
    }
    println!("{}", format_tones(&tones, cfg.output.format));

    if cfg.output.verify {
        match verify_ft8(&tones) {
            Ok((recovered, recovered_i3)) if recovered == payload && recovered_i3 == i3 => {
                tracing::info!("verify ok");
            }
            Ok((recovered, recovered_i3)) => {
                tracing::error!(
                    "verify returned a different message: {} i3 {}",
                    hex::encode_upper(recovered),
                    recovered_i3.into_raw()
                );
                std::process::exit(2);
            }
            Err(e) => {
                tracing::error!("verify failed: {:?}", e);
                std::process::exit(2);
            }
        }
    }
}
