use sc2_replay::Replay;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <replay.SC2Replay>", args[0]);
        std::process::exit(1);
    }

    let mut replay = Replay::open(&args[1])?;

    let version = replay.game_version()?;
    let length = replay.game_length()?;
    let details = replay.details()?;

    println!("Map:      {}", details.map_name);
    println!("Started:  {}", details.started_at);
    println!("Version:  {version}");
    println!(
        "Length:   {}:{:02}",
        length.as_secs() / 60,
        length.as_secs() % 60
    );

    if let Some(speed) = replay.game_speed()? {
        println!("Speed:    {speed}");
    }
    if let Some(game_type) = replay.game_type()? {
        println!("Type:     {game_type}");
    }
    if let Some(category) = replay.category()? {
        println!("Category: {category}");
    }
    if let Some(realm) = replay.realm()? {
        println!("Realm:    {realm}");
    }

    println!("Players:");
    for player in replay.players()? {
        let race = player
            .race
            .map_or_else(|| "unknown race".to_string(), |race| race.to_string());
        let color = player
            .color
            .map_or_else(|| "no color".to_string(), |color| color.to_string());
        println!(
            "  {} ({race}, {color}) - {}",
            player.name, player.outcome
        );
    }

    Ok(())
}
