use clap::Parser;
use load_planner::packer::Packer;
use load_planner::render;
use load_planner::types::{Dims, ItemSpec, Orientation};

#[derive(Parser)]
#[command(
    name = "load_planner",
    about = "3D container loading planner (greedy first-fit)"
)]
struct Cli {
    /// Container dimensions (LxWxH, e.g. 590x235x239)
    #[arg(long)]
    container: String,

    /// Container weight limit in kg
    #[arg(long)]
    max_weight: f64,

    /// Items as LxWxH:weight:qty (e.g. 50x40x30:10:5 80x60x50:25:3)
    #[arg(long = "items", num_args = 1..)]
    items: Vec<String>,

    /// Restrict items to their upright (unrotated) orientation
    #[arg(long)]
    no_rotate: bool,

    /// Show an ASCII floor plan of the loaded container
    #[arg(long)]
    layout: bool,
}

fn parse_dimensions(s: &str) -> Result<Dims, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 3 {
        return Err(format!("invalid dimensions '{}', expected LxWxH", s));
    }
    let length = parts[0]
        .parse::<u32>()
        .map_err(|_| format!("invalid length in '{}'", s))?;
    let width = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid width in '{}'", s))?;
    let height = parts[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid height in '{}'", s))?;
    if length == 0 || width == 0 || height == 0 {
        return Err(format!("dimensions must be non-zero in '{}'", s));
    }
    Ok(Dims::new(length, width, height))
}

fn parse_item(s: &str, index: usize, rotate: bool) -> Result<ItemSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("invalid item '{}', expected LxWxH:weight:qty", s));
    }
    let dims = parse_dimensions(parts[0])?;
    let weight = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid weight in '{}'", s))?;
    let qty = parts[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    if weight <= 0.0 {
        return Err(format!("weight must be positive in '{}'", s));
    }
    if qty == 0 {
        return Err(format!("quantity must be non-zero in '{}'", s));
    }
    let mut spec = ItemSpec::new(format!("item{}", index + 1), dims, weight, qty);
    if rotate {
        spec = spec.with_orientations(Orientation::ALL.to_vec());
    }
    Ok(spec)
}

fn main() {
    let cli = Cli::parse();

    let dims = parse_dimensions(&cli.container).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let specs: Vec<ItemSpec> = cli
        .items
        .iter()
        .enumerate()
        .map(|(i, s)| parse_item(s, i, !cli.no_rotate))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    let packer = Packer::new(dims, cli.max_weight, specs);
    let result = packer.pack().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("Container {} (max {} kg):", dims, cli.max_weight);
    for p in &result.container.items {
        println!(
            "  {} {} @ {} [{}]",
            p.name, p.dims, p.position, p.orientation
        );
    }
    if !result.unplaced.is_empty() {
        println!("Unplaced: {}", result.unplaced.join(", "));
    }
    if cli.layout {
        print!("{}", render::render_plan(&result.container));
    }

    println!(
        "Summary: {} of {} unit{} placed, {:.1} / {:.1} kg, {:.1}% volume used",
        result.placed_count(),
        result.placed_count() + result.unplaced_count(),
        if result.placed_count() + result.unplaced_count() == 1 {
            ""
        } else {
            "s"
        },
        result.container.current_weight,
        result.container.max_weight,
        result.container.utilization_percent(),
    );
}
