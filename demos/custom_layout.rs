use turnboard::*;

const CONFIG: &str = r#"{
    "geometry": { "board_size": 5, "square_size": 2.0 },
    "first_team": "Black",
    "layout": { "placements": [
        { "square": { "file": 2, "rank": 4 }, "team": "Black", "kind": "King" },
        { "square": { "file": 2, "rank": 0 }, "team": "White", "kind": "King" },
        { "square": { "file": 1, "rank": 1 }, "team": "White", "kind": "Knight" }
    ] }
}"#;

fn main() {
    println!("Custom Layout Demo\n");

    let config = match SessionConfig::from_json_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return;
        }
    };
    let mut session = GameSession::new(config, Box::new(StepRules)).expect("validated above");
    println!("{}", session.display_board());

    // Raw positions in board space; square size is 2.0 and (0, 0) is the board centre.
    for (x, y) in [(0.5, 4.5), (0.5, 2.5), (-2.5, -2.5), (-0.5, -4.0), (9.0, 9.0)] {
        let position = WorldPosition::new(x, y);
        let outcome = session.handle_input_at(position);
        println!(
            "{} -> {} : {:?}",
            position,
            session.board().coord_from_world(position),
            outcome
        );
    }

    println!("\n{}", session.display_board());
}
