use turnboard::*;

/// Prints each preview it is asked to show
struct PrintingPresenter;

impl SelectionPresenter for PrintingPresenter {
    fn show_selection(&mut self, squares: &[(WorldPosition, bool)]) {
        let free = squares.iter().filter(|(_, free)| *free).count();
        println!(
            "  preview: {} destinations, {} free",
            squares.len(),
            free
        );
    }

    fn clear_selection(&mut self) {
        println!("  preview cleared");
    }
}

fn main() {
    println!("Scripted Opening Demo\n");

    let mut session = GameSession::new(SessionConfig::default(), Box::new(StepRules))
        .expect("default configuration is valid")
        .with_presenter(Box::new(PrintingPresenter));

    let clicks = [
        (4, 1), // select White's e-pawn
        (4, 1), // deselect it
        (3, 1), // select the d-pawn
        (3, 6), // Black piece: not White's turn, rejected
        (3, 2), // commit
        (3, 6), // Black selects
        (3, 5), // commit
    ];

    for (file, rank) in clicks {
        let square = Coord::new(file, rank);
        let position = session.board().world_from_coord(square);
        println!("Click {} at {}", square, position);
        println!("  -> {:?}", session.handle_input_at(position));
    }

    println!("\n{}", session.display_board());
    for (n, record) in session.history().iter().enumerate() {
        println!("{}. {}", n + 1, record);
    }
}
