//! Property tests: the grid stays rectangular and history replays exactly

use csvgrid_core::{EditCommand, Editor, Grid};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..5, 0usize..6).prop_flat_map(|(cols, data_rows)| {
        prop::collection::vec(prop::collection::vec("[a-z0-9]{0,3}", cols), data_rows + 1)
            .prop_map(Grid::from_rows)
    })
}

fn arb_command() -> impl Strategy<Value = EditCommand> {
    let index = 0usize..7;
    prop_oneof![
        (index.clone(), index.clone(), "[a-z]{0,3}")
            .prop_map(|(row, col, value)| EditCommand::UpdateCell { row, col, value }),
        index.clone().prop_map(EditCommand::DeleteRow),
        index.clone().prop_map(EditCommand::InsertRowAbove),
        index.clone().prop_map(EditCommand::InsertRowBelow),
        index.clone().prop_map(EditCommand::DeleteColumn),
        (index.clone(), "[a-z]{0,3}").prop_map(|(col, name)| EditCommand::RenameColumn { col, name }),
        index.clone().prop_map(EditCommand::InsertColumnLeft),
        index.prop_map(EditCommand::InsertColumnRight),
        Just(EditCommand::Undo),
        Just(EditCommand::Redo),
    ]
}

proptest! {
    #[test]
    fn grid_stays_rectangular(grid in arb_grid(), commands in prop::collection::vec(arb_command(), 0..30)) {
        let mut editor = Editor::new();
        editor.load(grid, None);

        for command in commands {
            // Rejected requests are fine; they must not corrupt the grid
            let _ = editor.apply(command);
            prop_assert!(editor.grid().is_rectangular());
        }
    }

    #[test]
    fn header_survives_row_deletes(grid in arb_grid(), rows in prop::collection::vec(0usize..7, 0..10)) {
        let header = grid.header().map(<[String]>::to_vec);
        let mut editor = Editor::new();
        editor.load(grid, None);

        for row in rows {
            let _ = editor.delete_row(row);
        }
        prop_assert_eq!(editor.grid().header().map(<[String]>::to_vec), header);
    }

    #[test]
    fn undo_then_redo_restores_mutation(grid in arb_grid(), command in arb_command()) {
        prop_assume!(!command.is_history_step());

        let mut editor = Editor::new();
        editor.load(grid, None);

        if editor.apply(command).unwrap_or(false) {
            let after = editor.grid().clone();
            prop_assert!(editor.undo());
            prop_assert!(editor.redo());
            prop_assert_eq!(editor.grid(), &after);
        }
    }

    #[test]
    fn redo_replays_undone_states_in_order(grid in arb_grid(), commands in prop::collection::vec(arb_command(), 1..12)) {
        let mut editor = Editor::new();
        editor.load(grid, None);

        let mut states = vec![editor.grid().clone()];
        for command in commands.into_iter().filter(|c| !c.is_history_step()) {
            if editor.apply(command).unwrap_or(false) {
                states.push(editor.grid().clone());
            }
        }

        let steps = states.len() - 1;
        for expected in states.iter().rev().skip(1) {
            prop_assert!(editor.undo());
            prop_assert_eq!(editor.grid(), expected);
        }
        prop_assert!(!editor.undo());

        for expected in states.iter().skip(1) {
            prop_assert!(editor.redo());
            prop_assert_eq!(editor.grid(), expected);
        }
        prop_assert!(!editor.redo());
        prop_assert_eq!(editor.history().undo_depth(), steps);
    }
}
