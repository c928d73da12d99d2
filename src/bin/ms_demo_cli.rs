//! ms-demo-cli — 在终端中对微服务演示 API 发起实时请求
//!
//! Usage:
//!   ms-demo-cli [--base-url <url>] users list|get|create|update|delete ...
//!   ms-demo-cli [--base-url <url>] products list|get|create|update|delete ...
//!   ms-demo-cli [--base-url <url>] orders list|get|create|status ...
//!   ms-demo-cli [--base-url <url>] try <METHOD> <endpoint> [--path k=v] [--query k=v] [--body json]

use ms_demo_client::console::{ResponseView, TryItRequest};
use ms_demo_client::services::{orders, products, users};
use ms_demo_client::{ApiClient, Method, NormalizedResult};
use serde_json::Value;

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (base_url, args) = split_base_url(args);

    let Some(command) = args.first() else {
        print_usage();
        std::process::exit(1);
    };

    match command.as_str() {
        "version" | "--version" | "-V" => {
            println!("ms-demo-cli {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    let mut builder = ApiClient::builder();
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => fail(&e.to_string()),
    };

    let rest = &args[1..];
    let view = match command.as_str() {
        "users" => ResponseView::from_result(&cmd_users(&client, rest).await),
        "products" => ResponseView::from_result(&cmd_products(&client, rest).await),
        "orders" => ResponseView::from_result(&cmd_orders(&client, rest).await),
        "try" => cmd_try(&client, rest).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    println!("{view}");
    if !view.success {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"ms-demo-cli — microservice demo API console

USAGE:
    ms-demo-cli [--base-url <url>] <COMMAND>

COMMANDS:
    users list | get <id> | create <json> | update <id> <json> | delete <id>
    products list | get <id> | create <json> | update <id> <json> | delete <id>
    orders list [--user <id>] | get <id> | create <json> | status <id> <status>
    try <METHOD> <endpoint> [--path k=v]... [--query k=v]... [--body <json>]
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    MS_DEMO_BASE_URL            Server origin (default http://localhost:5000)
    MS_DEMO_HTTP_TIMEOUT_SECS   Transport timeout in seconds (default 30)
    MS_DEMO_PROXY_URL           Optional proxy
    RUST_LOG                    Log filter (default warn)"#
    );
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {message}");
    eprintln!();
    print_usage();
    std::process::exit(1);
}

fn split_base_url(args: Vec<String>) -> (Option<String>, Vec<String>) {
    let mut base_url = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--base-url" {
            match iter.next() {
                Some(url) => base_url = Some(url),
                None => usage_error("--base-url requires a value"),
            }
        } else {
            rest.push(arg);
        }
    }
    (base_url, rest)
}

fn arg<'a>(args: &'a [String], idx: usize, name: &str) -> &'a str {
    match args.get(idx) {
        Some(v) => v.as_str(),
        None => usage_error(&format!("missing <{name}>")),
    }
}

fn json_arg(args: &[String], idx: usize) -> Value {
    let raw = arg(args, idx, "json");
    match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => fail(&format!("Invalid JSON: {e}")),
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

async fn cmd_users(client: &ApiClient, args: &[String]) -> NormalizedResult {
    match arg(args, 0, "action") {
        "list" => users::get_all_users(client).await,
        "get" => users::get_user(client, arg(args, 1, "id")).await,
        "create" => users::create_user(client, &json_arg(args, 1)).await,
        "update" => users::update_user(client, arg(args, 1, "id"), &json_arg(args, 2)).await,
        "delete" => users::delete_user(client, arg(args, 1, "id")).await,
        other => usage_error(&format!("unknown users action '{other}'")),
    }
}

async fn cmd_products(client: &ApiClient, args: &[String]) -> NormalizedResult {
    match arg(args, 0, "action") {
        "list" => products::get_all_products(client).await,
        "get" => products::get_product(client, arg(args, 1, "id")).await,
        "create" => products::create_product(client, &json_arg(args, 1)).await,
        "update" => {
            products::update_product(client, arg(args, 1, "id"), &json_arg(args, 2)).await
        }
        "delete" => products::delete_product(client, arg(args, 1, "id")).await,
        other => usage_error(&format!("unknown products action '{other}'")),
    }
}

async fn cmd_orders(client: &ApiClient, args: &[String]) -> NormalizedResult {
    match arg(args, 0, "action") {
        "list" => orders::get_all_orders(client, flag_value(args, "--user")).await,
        "get" => orders::get_order(client, arg(args, 1, "id")).await,
        "create" => orders::create_order(client, &json_arg(args, 1)).await,
        "status" => {
            orders::update_order_status(client, arg(args, 1, "id"), arg(args, 2, "status")).await
        }
        other => usage_error(&format!("unknown orders action '{other}'")),
    }
}

fn split_pair(raw: &str) -> (String, String) {
    match raw.split_once('=') {
        Some((k, v)) => (k.to_string(), v.to_string()),
        None => usage_error(&format!("expected key=value, got '{raw}'")),
    }
}

async fn cmd_try(client: &ApiClient, args: &[String]) -> ResponseView {
    let method: Method = match arg(args, 0, "METHOD").parse() {
        Ok(m) => m,
        Err(e) => fail(&e.to_string()),
    };
    let mut request = TryItRequest::new(method, arg(args, 1, "endpoint"));

    let mut i = 2;
    while i < args.len() {
        let value = arg(args, i + 1, args[i].trim_start_matches('-'));
        match args[i].as_str() {
            "--path" => {
                let (k, v) = split_pair(value);
                request = request.path_param(k, v);
            }
            "--query" => {
                let (k, v) = split_pair(value);
                request = request.query_param(k, v);
            }
            "--body" => request = request.body_text(value),
            other => usage_error(&format!("unknown option '{other}'")),
        }
        i += 2;
    }

    match request.send(client).await {
        Ok(view) => view,
        Err(e) => fail(&e.to_string()),
    }
}
