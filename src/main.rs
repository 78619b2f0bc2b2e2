// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;

use tonality::{
    chords_for_scale, diatonic_triads, harmonic_seventh_scale, scale_notes, Chord, ChordType,
    Note, Scale, ScaleElement, Spelling, WalkOptions,
};

fn print_usage() {
    println!("TONALITY - Music Theory Explorer");
    println!();
    println!("Usage: tonality <COMMAND> [ARGS] [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  --scale <KEY> <MODE>        Print the notes of a scale (e.g. D dorian)");
    println!("  --chord <KEY> <TYPE>        Print a single chord (e.g. C maj7)");
    println!("  --chords <KEY>              Print the diatonic triads of a major key");
    println!("  --progression <KEY> <MODE>  Harmonize every degree of a mode");
    println!("  --harmonic <KEY>            Print the harmonized seventh arrangement");
    println!("  --derive <NOTE>...          Reverse-derive a chord from notes");
    println!("  --help                      Show this help message");
    println!();
    println!("Options:");
    println!("  --flats                     Spell derived notes with flats");
    println!("  --octaves <N>               Walk N octaves (scale command)");
    println!("  --intervals                 Interleave interval steps (scale command)");
    println!("  --yaml                      Emit YAML instead of plain text");
}

struct Flags {
    spelling: Spelling,
    octaves: usize,
    with_intervals: bool,
    yaml: bool,
}

fn parse_flags(args: &[String]) -> Result<(Vec<String>, Flags)> {
    let mut positional = Vec::new();
    let mut flags = Flags {
        spelling: Spelling::Sharps,
        octaves: 1,
        with_intervals: false,
        yaml: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--flats" => flags.spelling = Spelling::Flats,
            "--intervals" => flags.with_intervals = true,
            "--yaml" => flags.yaml = true,
            "--octaves" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--octaves requires a number"))?;
                flags.octaves = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid octave count: {}", value))?;
            }
            _ => positional.push(arg.clone()),
        }
    }

    Ok((positional, flags))
}

fn parse_note(input: &str) -> Result<Note> {
    Ok(input.parse::<Note>()?)
}

fn parse_scale(input: &str) -> Result<Scale> {
    Scale::by_name(input).ok_or_else(|| anyhow::anyhow!("Unknown scale: {}", input))
}

fn show_scale(key: Note, scale: Scale, flags: &Flags) -> Result<()> {
    let options = WalkOptions {
        octaves: flags.octaves,
        with_intervals: flags.with_intervals,
        ..WalkOptions::default()
    };
    let elements = scale_notes(scale, key, flags.spelling, &options)?;

    if flags.yaml {
        print!("{}", serde_yaml::to_string(&elements)?);
    } else {
        let rendered: Vec<String> = elements
            .iter()
            .map(|element| match element {
                ScaleElement::Note(note) => note.to_string(),
                ScaleElement::Interval(interval) => interval.to_string(),
            })
            .collect();
        println!("{} {}: {}", key, scale, rendered.join(" "));
    }
    Ok(())
}

fn show_chords(label: &str, chords: &[Chord], yaml: bool) -> Result<()> {
    if yaml {
        print!("{}", serde_yaml::to_string(chords)?);
    } else {
        println!("{}:", label);
        for chord in chords {
            println!("  {}", chord);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("TONALITY - Music Theory Explorer");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let (positional, flags) = parse_flags(&args[2..])?;

    match args[1].as_str() {
        "--scale" => {
            if positional.len() < 2 {
                eprintln!("Error: --scale requires a key and a mode");
                std::process::exit(1);
            }
            let key = parse_note(&positional[0])?;
            let scale = parse_scale(&positional[1])?;
            show_scale(key, scale, &flags)?;
        }
        "--chord" => {
            if positional.len() < 2 {
                eprintln!("Error: --chord requires a key and a chord type");
                std::process::exit(1);
            }
            let key = parse_note(&positional[0])?;
            let chord_type = ChordType::by_name(&positional[1])
                .ok_or_else(|| anyhow::anyhow!("Unknown chord type: {}", positional[1]))?;
            let chord = Chord::new(key, chord_type, flags.spelling)?;
            if flags.yaml {
                print!("{}", serde_yaml::to_string(&chord)?);
            } else {
                println!("{}", chord);
            }
        }
        "--chords" => {
            if positional.is_empty() {
                eprintln!("Error: --chords requires a key");
                std::process::exit(1);
            }
            let key = parse_note(&positional[0])?;
            let chords = diatonic_triads(key, flags.spelling)?;
            show_chords(&format!("{} major", key), &chords, flags.yaml)?;
        }
        "--progression" => {
            if positional.len() < 2 {
                eprintln!("Error: --progression requires a key and a mode");
                std::process::exit(1);
            }
            let key = parse_note(&positional[0])?;
            let scale = parse_scale(&positional[1])?;
            let chords = chords_for_scale(scale, key, flags.spelling)?;
            show_chords(&format!("{} {}", key, scale), &chords, flags.yaml)?;
        }
        "--harmonic" => {
            if positional.is_empty() {
                eprintln!("Error: --harmonic requires a key");
                std::process::exit(1);
            }
            let key = parse_note(&positional[0])?;
            let chords = harmonic_seventh_scale(key, flags.spelling)?;
            show_chords(&format!("{} harmonized sevenths", key), &chords, flags.yaml)?;
        }
        "--derive" => {
            if positional.is_empty() {
                eprintln!("Error: --derive requires at least one note");
                std::process::exit(1);
            }
            let notes: Vec<Note> = positional
                .iter()
                .map(|input| parse_note(input))
                .collect::<Result<_>>()?;
            match Chord::from_notes(&notes) {
                Some(chord) => println!("{}", chord),
                None => println!("No chord matches: {}", positional.join(" ")),
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
