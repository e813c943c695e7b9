use std::env;
use std::process;

use mbr::MbrImage;

const DEFAULT_IMAGE: &str = "mbr.bin";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [image]", args[0]);
        process::exit(1);
    }
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("Usage: {} [image]", args[0]);
        println!("Prints the MBR partition table of [image] (default: {})", DEFAULT_IMAGE);
        return;
    }
    let filename = args.get(1).map(String::as_str).unwrap_or(DEFAULT_IMAGE);

    match MbrImage::open(filename) {
        Ok(image) => print!("{}", mbr::render(&image)),
        Err(e) => {
            eprintln!("Error: {}: {}", filename, e);
            process::exit(1);
        }
    }
}
