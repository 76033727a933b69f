//! Quicksort visualizer CLI - Record and replay a quicksort trace in the terminal.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::Instant;

use quicksort_viz::{
    playback::{PlaybackController, play_blocking},
    schema::{SequenceGenerator, VisualizerConfig},
    trace::{Action, ActionKind, record_trace},
};

enum Mode {
    Play,
    Dump,
    Verify,
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return;
    }

    if args.iter().any(|a| a == "--example") {
        print_example_config();
        return;
    }

    let mut mode = Mode::Play;
    let mut config_path: Option<PathBuf> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--dump" => mode = Mode::Dump,
            "--verify" => mode = Mode::Verify,
            flag if flag.starts_with("--") => {
                eprintln!("Unknown flag: {}", flag);
                print_usage(&args[0]);
                std::process::exit(1);
            }
            path => config_path = Some(PathBuf::from(path)),
        }
    }

    let config = match &config_path {
        Some(path) => VisualizerConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        None => VisualizerConfig::default(),
    };

    match mode {
        Mode::Dump => dump_trace(&config),
        Mode::Verify => verify_trace(&config),
        Mode::Play => play(&config),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json] [--dump | --verify | --example]", program);
    eprintln!();
    eprintln!("Record a quicksort trace over random bar heights and replay it.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to visualizer configuration (default: built-in)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --dump       Print the recorded trace as JSON instead of playing it");
    eprintln!("  --verify     Record, check trace invariants and print statistics");
    eprintln!("  --example    Print an example configuration");
}

fn dump_trace(config: &VisualizerConfig) {
    let values = SequenceGenerator::from_config(config).generate(config.bar_count);
    let trace = record_trace(&values);
    match serde_json::to_string_pretty(&trace) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing trace: {}", e);
            std::process::exit(1);
        }
    }
}

fn verify_trace(config: &VisualizerConfig) {
    let values = SequenceGenerator::from_config(config).generate(config.bar_count);

    let start = Instant::now();
    let trace = record_trace(&values);
    let elapsed = start.elapsed();

    println!("Trace: {}", trace.stats());
    println!("Recorded in {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    if let Err(e) = trace.verify() {
        eprintln!("Trace invariant violated: {}", e);
        std::process::exit(1);
    }
    println!("All invariants hold.");
}

fn play(config: &VisualizerConfig) {
    println!("Quicksort Visualizer");
    println!("====================");
    println!(
        "Bars: {} (values {}..{})",
        config.bar_count, config.min_value, config.max_value
    );
    println!("Delay: {}ms", config.delay_ms);
    println!();

    let mut controller = PlaybackController::new(config, TextRenderer::default());
    println!("Actions: {}", controller.len());
    println!();

    let start = Instant::now();
    let applied = play_blocking(&mut controller);

    println!();
    println!(
        "Replayed {} actions in {:.2}s",
        applied,
        start.elapsed().as_secs_f32()
    );
}

/// Prints one line per applied action.
#[derive(Default)]
struct TextRenderer {
    step: usize,
}

impl quicksort_viz::Renderer for TextRenderer {
    fn on_action(&mut self, action: &Action) {
        let detail = match action.kind {
            ActionKind::Init => String::new(),
            ActionKind::Pivot { pivot, left, right } => {
                format!("p={} range=[{}, {}]", pivot, left, right)
            }
            ActionKind::Compare { pair, .. } | ActionKind::Swap { pair, .. } => {
                format!("({}, {})", pair.0, pair.1)
            }
            ActionKind::Sorted { position } => format!("#{}", position),
        };
        println!(
            "{:>5} {:<7} {:<24} sorted {:>3}/{:<3} {:?}",
            self.step,
            action.kind.label(),
            detail,
            action.sorted.len(),
            action.len(),
            action.snapshot
        );
        self.step += 1;
    }
}

fn print_example_config() {
    let config = VisualizerConfig {
        seed: Some(42),
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
