//! Flat-file dataset support: parsing the line-oriented `Star`/`Route`
//! records, rendering them back out, rendering the per-engine reports, and a
//! reproducible dataset generator. File I/O itself stays with the caller; all
//! functions here work on strings.

use crate::distance::euclidean_distance;
use crate::graph::{RawRoute, Star, StarMap};
use crate::knapsack::KnapsackSolution;
use crate::shortest_path::PathResult;
use crate::spanning_tree::SpanningTree;
use crate::StarMapError;
use num_traits::Float;
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Display;
use std::fmt::Write;

/// Parses a star map dataset.
///
/// Two record kinds are recognised:
/// * `Star A 12.0 34.0 56.0 7 8` - label, three coordinates, weight, profit.
/// * `Route A-B Distance: 12.34` - endpoint pair and route distance.
///
/// Lines with any other tag are skipped. A line carrying a known tag but
/// malformed fields (including negative weights or profits, which fail
/// unsigned parsing) is a `MalformedRecord` error. A repeated star label keeps
/// the first occurrence.
pub fn parse_dataset(contents: &str) -> Result<(Vec<Star<f64>>, Vec<RawRoute<f64>>), StarMapError> {
    let mut stars: Vec<Star<f64>> = Vec::new();
    let mut routes = Vec::new();
    let mut seen_labels = HashSet::new();

    for line in contents.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&"Star") => {
                let star = parse_star_record(line, &tokens)?;
                if seen_labels.insert(star.name.clone()) {
                    stars.push(star);
                }
            }
            Some(&"Route") => routes.push(parse_route_record(line, &tokens)?),
            _ => continue,
        }
    }

    Ok((stars, routes))
}

fn parse_star_record(line: &str, tokens: &[&str]) -> Result<Star<f64>, StarMapError> {
    if tokens.len() != 7 {
        return Err(StarMapError::MalformedRecord(format!(
            "expected 'Star <name> <x> <y> <z> <weight> <profit>', got: {line}"
        )));
    }
    let coords = [
        parse_field::<f64>(tokens[2], line)?,
        parse_field::<f64>(tokens[3], line)?,
        parse_field::<f64>(tokens[4], line)?,
    ];
    let weight = parse_field::<u32>(tokens[5], line)?;
    let profit = parse_field::<u32>(tokens[6], line)?;
    Ok(Star::new(tokens[1], coords, weight, profit))
}

fn parse_route_record(line: &str, tokens: &[&str]) -> Result<RawRoute<f64>, StarMapError> {
    let malformed = || {
        StarMapError::MalformedRecord(format!(
            "expected 'Route <from>-<to> Distance: <distance>', got: {line}"
        ))
    };
    if tokens.len() != 4 || tokens[2] != "Distance:" {
        return Err(malformed());
    }
    let (from, to) = tokens[1].split_once('-').ok_or_else(malformed)?;
    if from.is_empty() || to.is_empty() {
        return Err(malformed());
    }
    Ok(RawRoute {
        from: from.to_string(),
        to: to.to_string(),
        distance: parse_field::<f64>(tokens[3], line)?,
    })
}

fn parse_field<F: std::str::FromStr>(token: &str, line: &str) -> Result<F, StarMapError> {
    token.parse::<F>().map_err(|_| {
        StarMapError::MalformedRecord(format!("cannot parse field '{token}' in: {line}"))
    })
}

/// Renders stars and routes back into the flat dataset format understood by
/// [`parse_dataset`]. Star lines first, then route lines.
pub fn render_dataset<T: Float + Display>(stars: &[Star<T>], routes: &[RawRoute<T>]) -> String {
    let mut out = String::new();
    for star in stars {
        let [x, y, z] = star.coords;
        writeln!(
            out,
            "Star {} {x} {y} {z} {} {}",
            star.name, star.weight, star.profit
        )
        .unwrap();
    }
    for route in routes {
        writeln!(
            out,
            "Route {}-{} Distance: {}",
            route.from, route.to, route.distance
        )
        .unwrap();
    }
    out
}

/// Renders the shortest-path report: one line per star of the map, in index
/// order, with an unreachable marker for stars the source cannot reach.
pub fn shortest_path_report<T: Float + Display>(
    map: &StarMap<T>,
    source: usize,
    results: &[PathResult<T>],
) -> String {
    let source_label = map.label(source);
    let mut out = String::new();
    for (index, result) in results.iter().enumerate() {
        let label = map.label(index);
        if result.is_unreachable() {
            writeln!(out, "Star {label} is unreachable from Star {source_label}.").unwrap();
        } else {
            writeln!(
                out,
                "Shortest distance from Star {source_label} to Star {label} is {}",
                result.distance
            )
            .unwrap();
        }
    }
    out
}

/// Renders the spanning-tree report: one line per accepted route, in
/// acceptance order.
pub fn spanning_tree_report<T: Float + Display>(
    map: &StarMap<T>,
    tree: &SpanningTree<T>,
) -> String {
    let mut out = String::new();
    for route in &tree.routes {
        writeln!(
            out,
            "Connected Stars: {} - {} Distance: {}",
            map.label(route.from),
            map.label(route.to),
            route.distance
        )
        .unwrap();
    }
    out
}

/// Renders the knapsack report: totals, the selected stars, then the full
/// dynamic programming table with row and column headers.
pub fn knapsack_report<T: Float>(stars: &[Star<T>], solution: &KnapsackSolution) -> String {
    let mut out = String::new();
    writeln!(out, "Total Weight: {} kg", solution.total_weight).unwrap();
    writeln!(out, "Total Profit: {}", solution.total_profit).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "Stars to visit:").unwrap();
    for &index in &solution.selected {
        let star = &stars[index];
        writeln!(
            out,
            "Star {} Weight: {} kg, Profit: {}",
            star.name, star.weight, star.profit
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "Dynamic programming table:").unwrap();
    out.push_str("     ");
    for column in 0..=solution.table.capacity() {
        write!(out, "{column:>4} ").unwrap();
    }
    out.push('\n');
    for (row_number, row) in solution.table.rows().iter().enumerate() {
        write!(out, "{row_number:>4} ").unwrap();
        for cell in row {
            write!(out, "{cell:>4} ").unwrap();
        }
        out.push('\n');
    }
    out
}

/// Spreadsheet-style label for star `index`: A..Z, then AA, AB and so on.
/// Removes the single-character ceiling of the original record format while
/// staying compatible with it for the first 26 stars.
pub fn star_label(index: usize) -> String {
    let mut remaining = index;
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (remaining % 26) as u8);
        remaining /= 26;
        if remaining == 0 {
            break;
        }
        remaining -= 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap()
}

/// Generates a synthetic star map from the passed RNG: 3-digit coordinates,
/// 2-digit weights and profits, a route chain A-B, B-C, ... guaranteeing
/// connectivity, plus `extra_routes` distinct random routes. Route distances
/// are the Euclidean distances between the endpoint coordinates.
///
/// Deterministic for a given RNG state, so tests and callers wanting
/// reproducible datasets should seed the RNG explicitly.
pub fn generate_dataset<R: Rng>(
    rng: &mut R,
    star_count: usize,
    extra_routes: usize,
) -> (Vec<Star<f64>>, Vec<RawRoute<f64>>) {
    let stars: Vec<Star<f64>> = (0..star_count)
        .map(|index| {
            let coords = [
                rng.gen_range(100..1000) as f64,
                rng.gen_range(100..1000) as f64,
                rng.gen_range(100..1000) as f64,
            ];
            let weight = rng.gen_range(10..100);
            let profit = rng.gen_range(10..100);
            Star::new(star_label(index), coords, weight, profit)
        })
        .collect();

    let mut pairs: HashSet<(usize, usize)> = HashSet::new();
    let mut routes = Vec::new();
    let mut add_route = |pairs: &mut HashSet<(usize, usize)>,
                         routes: &mut Vec<RawRoute<f64>>,
                         from: usize,
                         to: usize| {
        let key = (from.min(to), from.max(to));
        if pairs.insert(key) {
            routes.push(RawRoute {
                from: stars[from].name.clone(),
                to: stars[to].name.clone(),
                distance: euclidean_distance(&stars[from].coords, &stars[to].coords),
            });
            true
        } else {
            false
        }
    };

    // Chain guarantees every star is reachable
    for index in 1..star_count {
        add_route(&mut pairs, &mut routes, index - 1, index);
    }

    if star_count > 1 {
        let max_extra = star_count * (star_count - 1) / 2 - (star_count - 1);
        let mut remaining = extra_routes.min(max_extra);
        while remaining > 0 {
            let from = rng.gen_range(0..star_count);
            let to = rng.gen_range(0..star_count);
            if from != to && add_route(&mut pairs, &mut routes, from, to) {
                remaining -= 1;
            }
        }
    }

    (stars, routes)
}
