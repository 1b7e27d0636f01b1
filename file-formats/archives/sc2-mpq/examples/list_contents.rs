use sc2_mpq::{Archive, Extraction};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <replay.SC2Replay>", args[0]);
        std::process::exit(1);
    }

    let archive_path = &args[1];
    println!("Archive: {archive_path}");

    let mut archive = Archive::open(archive_path)?;
    println!("User data: {} bytes", archive.user_data().len());
    println!("Sector size: {} bytes", archive.sector_size());

    match archive.list()? {
        Some(names) => {
            println!("Manifest lists {} members:", names.len());
            for name in &names {
                let size = match archive.read_file(name)? {
                    Extraction::Data(data) => format!("{} bytes", data.len()),
                    Extraction::Absent => "absent".to_string(),
                    Extraction::Encrypted => "encrypted".to_string(),
                };
                println!("  {name}: {size}");
            }
        }
        None => println!("Archive carries no (listfile) manifest"),
    }

    Ok(())
}
