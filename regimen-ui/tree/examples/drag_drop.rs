use regimen_ui_tree::{
    DragError, DragSession, FlatEntry, Node, NodeId, TreePayload, apply_drop,
    visible_entries,
};

const INDENTATION_WIDTH: f32 = 50.0;

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Circuit(&'static str),
    Move(&'static str),
}

impl Step {
    fn title(&self) -> &str {
        match self {
            Step::Circuit(title) | Step::Move(title) => title,
        }
    }
}

impl TreePayload for Step {
    fn supports_children(&self) -> bool {
        matches!(self, Step::Circuit(_))
    }
}

fn print_rows(caption: &str, rows: &[FlatEntry<Step>]) {
    println!("{caption}:");
    for row in rows {
        let pad = "  ".repeat(row.depth + 1);
        println!("{pad}{}", row.payload.title());
    }
}

fn main() -> Result<(), DragError> {
    let tree = vec![
        Node::container(
            "circuit",
            Step::Circuit("Circuit x3"),
            vec![Node::new("squat", Step::Move("Squat"))],
        ),
        Node::new("press", Step::Move("Press")),
        Node::new("row", Step::Move("Row")),
    ];
    print_rows("before", &visible_entries(&tree, None));

    // Grab "press" and pull it one indentation level to the right.
    let mut session = DragSession::new();
    session.start(NodeId::from("press"))?;
    session.move_by(INDENTATION_WIDTH)?;

    let rows = visible_entries(&tree, session.active_id());
    if let Some(projection) = session.projection(&rows, INDENTATION_WIDTH) {
        println!(
            "projected depth {} under {:?}",
            projection.depth, projection.parent_id
        );
    }

    let Some(target) = session.end(&rows, INDENTATION_WIDTH)? else {
        println!("nothing to drop");
        return Ok(());
    };
    let tree = apply_drop(&tree, &target).unwrap_or(tree);
    print_rows("after", &visible_entries(&tree, None));
    Ok(())
}
