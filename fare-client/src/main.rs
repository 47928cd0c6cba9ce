use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use fare_client::api::{ApiClient, ApiConfig};
use fare_client::focus::{Field, FocusCoordinator, Key, UiCommand};
use fare_client::form::{FareAction, FareForm, InputMode};
use fare_client::search::{SEARCH_DEBOUNCE, SearchPanel};
use fare_client::ui::render;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env();
    println!("Bus Fare Calculator (fare service: {})", config.base_url);

    let client = Arc::new(ApiClient::new(config).expect("Failed to create API client"));

    // Probe the service so a dead backend is visible up front.
    match client.all_locations().await {
        Ok(list) => println!("Loaded {} known locations", list.total),
        Err(e) => eprintln!("Warning: fare service unreachable ({e}). Calls will fail."),
    }

    let (focus, mut commands) = FocusCoordinator::new();
    let panel = SearchPanel::new(Arc::clone(&client), focus.clone());
    let form = FareForm::new(client);
    let mut mode = InputMode::Locations;

    println!();
    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "quit" | "exit" => break,

            "mode" => match rest {
                "locations" => mode = InputMode::Locations,
                "distance" => mode = InputMode::Distance,
                _ => println!("usage: mode locations|distance"),
            },

            "from" => type_into(&panel, Field::Start, rest).await,
            "to" => type_into(&panel, Field::End, rest).await,

            "pick" => {
                let picked = match rest.split_once(' ') {
                    Some(("from", index)) => parse_pick(Field::Start, index),
                    Some(("to", index)) => parse_pick(Field::End, index),
                    _ => None,
                };
                match picked {
                    Some((field, index)) => match panel.select(field, index).await {
                        Some(action) => form.dispatch(action).await,
                        None => println!("no suggestion at that index"),
                    },
                    None => println!("usage: pick from|to <n>"),
                }
            }

            "distance" => {
                form.dispatch(FareAction::SetDistance(rest.to_string())).await;
            }
            "bus" => match rest.parse() {
                Ok(bus_type) => form.dispatch(FareAction::SetBusType(bus_type)).await,
                Err(e) => println!("{e}"),
            },
            "discount" => match rest.parse() {
                Ok(discount) => form.dispatch(FareAction::SetDiscountType(discount)).await,
                Err(e) => println!("{e}"),
            },

            "tab" => {
                focus.handle_key(Key::Tab).await;
            }
            "backtab" => {
                focus.handle_key(Key::ShiftTab).await;
            }
            "out" => panel.close_all().await,

            "calc" => {
                form.submit(mode).await;
                let state = form.state().await;
                if let Some(error) = &state.error {
                    println!("{}", render::error_banner(error));
                } else if let Some(details) = &state.fare_details {
                    print!("{}", render::result_card(details, &state, mode));
                }
            }

            "reset" => {
                form.reset().await;
                panel.clear().await;
                println!("form reset");
            }

            "show" => {
                let state = form.state().await;
                print!("{}", render::form_summary(&state, mode));
                for field in [Field::Start, Field::End] {
                    let search = panel.snapshot(field).await;
                    if search.dropdown_open {
                        println!("{field} suggestions:");
                        print!("{}", render::dropdown(&search.results));
                    }
                }
                if let Some(error) = &state.error {
                    println!("{}", render::error_banner(error));
                }
            }

            _ => println!("unknown command (try: help)"),
        }

        drain_commands(&mut commands);
    }
}

/// Feed text into a picker, wait out the debounce, show the suggestions.
async fn type_into(panel: &SearchPanel<ApiClient>, field: Field, text: &str) {
    panel.on_input(field, text).await;
    tokio::time::sleep(SEARCH_DEBOUNCE + std::time::Duration::from_millis(200)).await;
    let state = panel.snapshot(field).await;
    print!("{}", render::dropdown(&state.results));
}

fn parse_pick(field: Field, index: &str) -> Option<(Field, usize)> {
    index.trim().parse().ok().map(|index| (field, index))
}

fn drain_commands(commands: &mut UnboundedReceiver<UiCommand>) {
    while let Ok(command) = commands.try_recv() {
        match command {
            UiCommand::FocusField { field, caret_end } => {
                if caret_end {
                    println!("(focus → {field} input, caret at end)");
                } else {
                    println!("(focus → {field} input)");
                }
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  mode locations|distance     how the route is supplied");
    println!("  from <text> | to <text>     type into a location picker");
    println!("  pick from|to <n>            choose a suggestion by index");
    println!("  distance <km>               set the distance (distance mode)");
    println!("  bus ac|nonac                pick the bus type");
    println!("  discount none|student|pass  pick the discount class");
    println!("  tab | backtab               move focus between pickers");
    println!("  out                         click outside the dropdowns");
    println!("  calc | reset | show         submit, clear, inspect");
    println!("  quit");
}
