//! Interactive antenna field console.
//!
//! Menu surface over the core: the antenna registry on one side, the
//! same-frequency graph on the other. State is loaded from the data
//! directory on startup (binary first, text grid as fallback) and both
//! formats are rewritten after every successful mutation. Every menu
//! entry maps onto exactly one core operation and reports its result;
//! no core failure aborts the process.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use antgrid::core::{derive_effects, AntennaRegistry};
use antgrid::graph::{breadth_first, depth_first, FieldGraph};
use antgrid::render::Grid;
use antgrid::storage::{self, PointRecord};

const ANTENNAS_BIN: &str = "antennas.bin";
const ANTENNAS_TXT: &str = "antennas.txt";
const GRAPH_BIN: &str = "graph.bin";
const GRAPH_TXT: &str = "graph.txt";

#[derive(Parser, Debug)]
#[command(name = "antgrid", version, about = "Bounded-grid antenna field console")]
struct Options {
    /// Directory holding the persisted antenna and graph files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> antgrid::Result<()> {
    env_logger::init();
    let options = Options::parse();

    let mut registry = AntennaRegistry::new();
    let records = load_records(&options.data_dir, ANTENNAS_BIN, ANTENNAS_TXT, "antennas");
    let kept = registry.extend_lossy(records.into_iter().map(Into::into));
    if kept > 0 {
        println!("{kept} antennas loaded.");
    }

    let mut graph = FieldGraph::new();
    let records = load_records(&options.data_dir, GRAPH_BIN, GRAPH_TXT, "graph");
    let kept = graph.extend_lossy(records.into_iter().map(Into::into));
    if kept > 0 {
        println!("{kept} vertices loaded.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("--- MAIN MENU ---");
        println!("1 - Antennas");
        println!("2 - Graph");
        println!("3 - Quit");
        let Some(choice) = ask(&mut input, "Option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => antenna_menu(&mut input, &options.data_dir, &mut registry)?,
            "2" => graph_menu(&mut input, &options.data_dir, &mut graph)?,
            "3" => break,
            _ => println!("Invalid option."),
        }
    }

    println!("Done.");
    Ok(())
}

// =============================================================================
// ANTENNA MENU
// =============================================================================

fn antenna_menu(
    input: &mut impl BufRead,
    dir: &Path,
    registry: &mut AntennaRegistry,
) -> antgrid::Result<()> {
    loop {
        println!();
        println!("--- ANTENNAS ---");
        println!("1 - Insert antenna");
        println!("2 - Remove antenna");
        println!("3 - Show grid with effects");
        println!("4 - Back");
        let Some(choice) = ask(input, "Option: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some((freq, x, y)) = ask_antenna(input)? else {
                    return Ok(());
                };
                match registry.insert(freq, x, y) {
                    Ok(()) => {
                        println!("Antenna inserted.");
                        persist_antennas(dir, registry);
                    }
                    Err(err) => println!("Rejected: {err}."),
                }
            }
            "2" => {
                let Some((freq, x, y)) = ask_antenna(input)? else {
                    return Ok(());
                };
                match registry.remove(freq, x, y) {
                    Ok(()) => {
                        println!("Antenna removed.");
                        persist_antennas(dir, registry);
                    }
                    Err(err) => println!("Rejected: {err}."),
                }
            }
            "3" => {
                // Effects are derived fresh on every listing.
                let effects = derive_effects(registry.antennas());
                print!("{}", Grid::compose(registry.antennas(), Some(&effects)));
            }
            "4" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}

// =============================================================================
// GRAPH MENU
// =============================================================================

fn graph_menu(
    input: &mut impl BufRead,
    dir: &Path,
    graph: &mut FieldGraph,
) -> antgrid::Result<()> {
    loop {
        println!();
        println!("--- GRAPH ---");
        println!("1 - Insert vertex");
        println!("2 - Remove vertex");
        println!("3 - Show grid with effects");
        println!("4 - Show vertices");
        println!("5 - Depth-first search");
        println!("6 - Breadth-first search");
        println!("7 - Back");
        let Some(choice) = ask(input, "Option: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some((freq, x, y)) = ask_antenna(input)? else {
                    return Ok(());
                };
                match graph.insert_vertex(freq, x, y) {
                    Ok(id) => {
                        // Linking cannot fail for an id just handed out.
                        let linked = graph.link_same_frequency(id).unwrap_or(0);
                        println!("Vertex inserted with id {id}, {linked} link(s) created.");
                        persist_graph(dir, graph);
                    }
                    Err(err) => println!("Rejected: {err}."),
                }
            }
            "2" => {
                let Some(id) = ask_u32(input, "Vertex id: ")? else {
                    return Ok(());
                };
                match graph.remove_vertex(id) {
                    Ok(()) => {
                        println!("Vertex removed.");
                        persist_graph(dir, graph);
                    }
                    Err(err) => println!("Rejected: {err}."),
                }
            }
            "3" => {
                let effects = derive_effects(graph.antennas());
                print!("{}", Grid::compose(graph.antennas(), Some(&effects)));
            }
            "4" => {
                if graph.is_empty() {
                    println!("No vertices.");
                }
                for vertex in graph.vertices() {
                    let links: Vec<String> =
                        vertex.adjacency().iter().map(u32::to_string).collect();
                    println!(
                        "{} '{}' {} -> [{}]",
                        vertex.id,
                        vertex.freq,
                        vertex.pos,
                        links.join(", ")
                    );
                }
            }
            "5" => {
                let Some(id) = ask_u32(input, "Origin vertex id: ")? else {
                    return Ok(());
                };
                report_traversal(depth_first(graph, id));
            }
            "6" => {
                let Some(id) = ask_u32(input, "Origin vertex id: ")? else {
                    return Ok(());
                };
                report_traversal(breadth_first(graph, id));
            }
            "7" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}

fn report_traversal(result: antgrid::Result<Vec<u32>>) {
    match result {
        Ok(order) => {
            let order: Vec<String> = order.iter().map(u32::to_string).collect();
            println!("Visit order: {}", order.join(" -> "));
        }
        Err(_) => println!("Origin vertex not found."),
    }
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

/// Load records from the binary file, falling back to the text grid.
fn load_records(dir: &Path, bin: &str, txt: &str, what: &str) -> Vec<PointRecord> {
    let path = dir.join(bin);
    match storage::binary::load(&path) {
        Ok(records) => {
            println!("Loaded {what} from {}.", path.display());
            return records;
        }
        Err(err) => log::debug!("no binary {what} file: {err}"),
    }

    let path = dir.join(txt);
    match storage::text::load(&path) {
        Ok(records) => {
            println!("Loaded {what} from {}.", path.display());
            records
        }
        Err(err) => {
            log::debug!("no text {what} file: {err}");
            println!("No {what} file found, starting empty.");
            Vec::new()
        }
    }
}

fn persist_antennas(dir: &Path, registry: &AntennaRegistry) {
    let records: Vec<PointRecord> = registry.antennas().map(Into::into).collect();
    let grid = Grid::compose(registry.antennas(), None);
    persist(dir, ANTENNAS_BIN, ANTENNAS_TXT, records, &grid);
}

fn persist_graph(dir: &Path, graph: &FieldGraph) {
    let records: Vec<PointRecord> = graph.antennas().map(Into::into).collect();
    let grid = Grid::compose(graph.antennas(), None);
    persist(dir, GRAPH_BIN, GRAPH_TXT, records, &grid);
}

/// Rewrite both persisted forms. A failed write is reported, never fatal.
fn persist(dir: &Path, bin: &str, txt: &str, mut records: Vec<PointRecord>, grid: &Grid) {
    records.sort_by_key(|r| (r.y, r.x));
    if let Err(err) = storage::binary::save(dir.join(bin), &records) {
        eprintln!("Could not write {bin}: {err}");
    }
    if let Err(err) = storage::text::save(dir.join(txt), grid) {
        eprintln!("Could not write {txt}: {err}");
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

/// Prompt for one trimmed line. `None` means stdin was closed.
fn ask(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_antenna(input: &mut impl BufRead) -> io::Result<Option<(char, i32, i32)>> {
    let Some(freq) = ask_char(input, "Frequency: ")? else {
        return Ok(None);
    };
    let Some(x) = ask_i32(input, "Coordinate x: ")? else {
        return Ok(None);
    };
    let Some(y) = ask_i32(input, "Coordinate y: ")? else {
        return Ok(None);
    };
    Ok(Some((freq, x, y)))
}

fn ask_char(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<char>> {
    loop {
        let Some(line) = ask(input, prompt)? else {
            return Ok(None);
        };
        if let Some(first) = line.chars().next() {
            return Ok(Some(first));
        }
        println!("A frequency character is required.");
    }
}

fn ask_i32(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<i32>> {
    loop {
        let Some(line) = ask(input, prompt)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Not a number."),
        }
    }
}

fn ask_u32(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<u32>> {
    loop {
        let Some(line) = ask(input, prompt)? else {
            return Ok(None);
        };
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Not a number."),
        }
    }
}
