use anyhow::Result;
use caseforge_common::{logger, AppConfig, CaseforgeError};
use caseforge_export::{write_csv, write_xlsx};
use caseforge_llm::{CaseGenerator, OpenAiClient};
use caseforge_table::parse_table;
use clap::Parser;
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "caseforge")]
#[command(about = "Caseforge - generate QA test cases from a functional requirements document", long_about = None)]
struct Cli {
    /// Functional requirements document (.docx, or plain text)
    input: PathBuf,

    /// Output CSV path
    #[arg(long, short, default_value = "test_cases.csv")]
    output: PathBuf,

    /// Also export an XLSX workbook to this path
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Chat model to use (overrides CASEFORGE_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Maximum prompt token budget (overrides CASEFORGE_MAX_TOKENS)
    #[arg(long)]
    max_tokens: Option<usize>,

    /// API base URL (overrides CASEFORGE_API_BASE_URL)
    #[arg(long)]
    api_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // Note: AppConfig::from_env() also loads .env, but we do it here early
    // so CLI argument overrides land on top of it
    load_dotenv_from_project_root();

    if let Some(model) = &cli.model {
        std::env::set_var("CASEFORGE_MODEL", model);
    }
    if let Some(max_tokens) = cli.max_tokens {
        std::env::set_var("CASEFORGE_MAX_TOKENS", max_tokens.to_string());
    }
    if let Some(base_url) = &cli.api_base_url {
        std::env::set_var("CASEFORGE_API_BASE_URL", base_url);
    }

    let config = AppConfig::from_env()?;
    config.validate()?;

    logger::setup_logging(&config.log_level)?;

    tracing::info!("Caseforge starting...");
    tracing::info!("  Model: {}", config.model);
    tracing::info!("  Token budget: {}", config.max_prompt_tokens);
    tracing::info!("  Input: {}", cli.input.display());

    run(cli, config).await?;

    Ok(())
}

/// The pipeline: read document, generate, parse, export
async fn run(cli: Cli, config: AppConfig) -> caseforge_common::Result<()> {
    let text = caseforge_docx::read_document(&cli.input)?;
    if text.trim().is_empty() {
        return Err(CaseforgeError::input(format!(
            "Document is empty: {}",
            cli.input.display()
        )));
    }

    let client = OpenAiClient::new(&config)?;
    let generator = CaseGenerator::new(client, config.model.as_str(), config.max_prompt_tokens);

    tracing::info!("Generating test cases with model: {}", config.model);
    let generated = generator.generate_cases(&text).await?;
    tracing::debug!("Generated model output:\n{}", generated);

    let records = parse_table(&generated);
    if records.is_empty() {
        // Distinct from input/generation failures: the model answered,
        // but produced nothing matching the 4-column schema
        return Err(CaseforgeError::ParseEmpty);
    }
    tracing::info!("Parsed {} test cases", records.len());

    write_csv(&cli.output, &records)?;
    if let Some(xlsx_path) = &cli.xlsx {
        write_xlsx(xlsx_path, &records)?;
    }

    Ok(())
}
