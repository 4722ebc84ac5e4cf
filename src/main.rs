use std::{io::Write, path::Path, process, sync::Arc};

use postboard::{
    application::{
        api::PostsApi,
        board::PostBoard,
        error::AppError,
        page::{FormField, PageSurface, SubmitEvent},
    },
    config::{self, Command, CreateArgs, OutputFormat, Settings},
    infra::{api_client::PostsClient, telemetry},
    presentation::document::Document,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let api: Arc<dyn PostsApi> = Arc::new(PostsClient::new(settings.api.base_url.clone())?);
    let board = PostBoard::new(api, settings.display.timezone);

    info!(
        target = "postboard",
        base_url = %settings.api.base_url,
        timezone = %settings.display.timezone,
        "Starting postboard"
    );

    match cli_args.command.unwrap_or(Command::List) {
        Command::List => run_list(&board, &settings).await,
        Command::Create(args) => run_create(&board, &settings, args).await,
        Command::Interactive => run_interactive(&board, &settings).await,
        Command::Snapshot(args) => run_snapshot(&board, &args.file).await,
    }
}

async fn run_list(board: &PostBoard, settings: &Settings) -> Result<(), AppError> {
    let mut page = Document::new();
    let loaded = board.on_load(&mut page).await;
    print_container(&page, settings.display.format)?;
    loaded?;
    Ok(())
}

async fn run_create(
    board: &PostBoard,
    settings: &Settings,
    args: CreateArgs,
) -> Result<(), AppError> {
    let mut page = Document::with_form(args.title, args.content);
    let mut event = SubmitEvent::new();
    let submitted = board.on_submit(&mut page, &mut event).await;

    print_alerts(&mut page);
    if submitted.is_ok() {
        print_container(&page, settings.display.format)?;
    }
    submitted?;
    Ok(())
}

async fn run_interactive(board: &PostBoard, settings: &Settings) -> Result<(), AppError> {
    let mut page = Document::new();
    // Load failures are already on the page.
    let _ = board.on_load(&mut page).await;
    print_container(&page, settings.display.format)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("Title: ")?;
        let Some(title) = lines.next_line().await? else {
            break;
        };
        prompt("Content: ")?;
        let Some(content) = lines.next_line().await? else {
            break;
        };

        page.set_field_value(FormField::Title, &title);
        page.set_field_value(FormField::Content, &content);

        let mut event = SubmitEvent::new();
        let submitted = board.on_submit(&mut page, &mut event).await;
        print_alerts(&mut page);
        if submitted.is_ok() {
            print_container(&page, settings.display.format)?;
        }
    }

    Ok(())
}

async fn run_snapshot(board: &PostBoard, path: &Path) -> Result<(), AppError> {
    let mut page = Document::new();
    let _ = board.on_load(&mut page).await;

    let html = page.page_html()?;
    tokio::fs::write(path, html).await?;
    info!(
        target = "postboard::snapshot",
        path = %path.display(),
        posts = page.container().post_count(),
        "Snapshot written"
    );
    Ok(())
}

fn print_container(page: &Document, format: OutputFormat) -> Result<(), AppError> {
    let rendered = match format {
        OutputFormat::Html => page.container_html()?,
        OutputFormat::Text => page.container_text()?,
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn print_alerts(page: &mut Document) {
    for alert in page.take_alerts() {
        eprintln!("{alert}");
    }
}

fn prompt(label: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(label.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
