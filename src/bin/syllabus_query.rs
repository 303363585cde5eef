use std::env;
use syllabus_search::config::{self, Config};
use syllabus_search::search::{Completion, SearchState};
use syllabus_search::syllabus::{SyllabusClient, SyllabusRecord};
use tracing::error;

#[tokio::main]
async fn main() {
    // Use RUST_LOG env var if set, otherwise stay quiet apart from warnings
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let args: Vec<String> = env::args().collect();
    let mut config = Config::load();
    let mut by_name = false;
    let mut by_teacher = false;
    let mut query: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                by_name = true;
                i += 1;
            }
            "--teacher" => {
                by_teacher = true;
                i += 1;
            }
            "--base-url" => {
                if i + 1 >= args.len() {
                    error!("--base-url requires a URL");
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
                match config::parse_base_url(&args[i + 1]) {
                    Ok(url) => config.api_base_url = url,
                    Err(e) => {
                        error!("{}", e);
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            arg if arg.starts_with("--") => {
                error!("Unknown option: {}", arg);
                print_usage(&args[0]);
                std::process::exit(1);
            }
            arg => {
                if query.is_some() {
                    error!("Only one query may be given");
                    print_usage(&args[0]);
                    std::process::exit(1);
                }
                query = Some(arg.to_string());
                i += 1;
            }
        }
    }

    let Some(query) = query else {
        print_usage(&args[0]);
        std::process::exit(1);
    };

    let client = match SyllabusClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create syllabus client: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = SearchState::new(config.page_size);
    state.set_query(query);
    state.toggle_name_filter(by_name);
    state.toggle_teacher_filter(by_teacher);

    let Some(request) = state.begin_search() else {
        error!("Query must not be empty");
        std::process::exit(1);
    };

    let outcome = request.send(&client).await;
    match state.complete_search(request.ticket, outcome) {
        Completion::Applied { count: 0 } => {
            println!("No results for '{}'", request.query);
        }
        Completion::Applied { count } => {
            let page_count = state.page_count();
            println!("{} result(s) for '{}'", count, request.query);
            for page in 1..=page_count {
                state.change_page(page);
                println!();
                println!("--- page {}/{} ---", page, page_count);
                for record in state.visible_results() {
                    print_record(record);
                }
            }
        }
        Completion::Failed | Completion::Stale => {
            let reason = state.last_error().unwrap_or("unknown error");
            eprintln!("Search failed: {}", reason);
            std::process::exit(1);
        }
    }
}

fn print_record(record: &SyllabusRecord) {
    println!();
    println!("{} <{}>", record.name, record.url);
    println!("  {}", record.description());
    println!("  {}", record.schedule_line());
    println!("  {}", record.category_line());
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--name | --teacher] [--base-url URL] <query>", program);
    eprintln!();
    eprintln!("  --name       Search course names (the default)");
    eprintln!("  --teacher    Search teacher names; ignored when --name is also given");
    eprintln!("  --base-url   Syllabus service root, overrides SYLLABUS_API_BASE_URL");
}
