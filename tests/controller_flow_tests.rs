use glam::DVec2;
use playbook_diagram::app::build_preview;
use playbook_diagram::{
    AppCommand, AppController, CanvasPx, ControlPoint, Drawing, DrawingStyle, EditorState,
    LinemanPosition, PathMode, PathSegment, Player, PlayFile, PointType, ScreenDelta, ScreenPx,
};

fn route(id: &str, x: f64) -> Drawing {
    let mut drawing = Drawing::new(id, DrawingStyle::default());
    drawing.insert_point(ControlPoint::new("a", DVec2::new(x, 300.0), PointType::Start));
    drawing.insert_point(ControlPoint::new("b", DVec2::new(x, 150.0), PointType::End));
    drawing.push_segment(PathSegment::line("a", "b"));
    drawing
}

fn drawing_ids(state: &EditorState) -> Vec<String> {
    state.drawings().iter().map(|d| d.id.clone()).collect()
}

fn run(controller: &mut AppController, state: &mut EditorState, command: AppCommand) {
    controller
        .handle_command(state, command)
        .expect("Command sollte ohne Fehler durchlaufen");
}

#[test]
fn undo_twice_and_redo_twice_restores_latest_state() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    for (i, id) in ["c1", "c2", "c3"].iter().enumerate() {
        run(
            &mut controller,
            &mut state,
            AppCommand::AddDrawing {
                drawing: route(id, 100.0 * (i as f64 + 1.0)),
            },
        );
    }
    let latest = state.drawings().to_vec();

    run(&mut controller, &mut state, AppCommand::Undo);
    assert_eq!(drawing_ids(&state), vec!["c1", "c2"]);
    run(&mut controller, &mut state, AppCommand::Undo);
    assert_eq!(drawing_ids(&state), vec!["c1"]);

    run(&mut controller, &mut state, AppCommand::Redo);
    run(&mut controller, &mut state, AppCommand::Redo);

    assert_eq!(state.drawings(), latest.as_slice());
    assert!(!state.can_redo());
}

#[test]
fn undo_past_first_entry_clears_canvas() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("c1", 100.0),
        },
    );

    run(&mut controller, &mut state, AppCommand::Undo);

    assert!(state.drawings().is_empty());
    assert!(!state.can_undo());

    run(&mut controller, &mut state, AppCommand::Redo);
    assert_eq!(drawing_ids(&state), vec!["c1"]);
}

#[test]
fn load_play_starts_fresh_history() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();
    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("alt", 50.0),
        },
    );

    let play = PlayFile {
        name: "Dive".to_string(),
        drawings: vec![route("r1", 200.0)],
        players: vec![Player::new("rb", DVec2::new(200.0, 320.0))],
        lineman_positions: Vec::new(),
    };
    run(&mut controller, &mut state, AppCommand::LoadPlay { play });

    assert_eq!(state.play_name.as_deref(), Some("Dive"));
    assert_eq!(state.history.len(), 1);

    // Undo am geladenen Stand leert den Canvas
    run(&mut controller, &mut state, AppCommand::Undo);
    assert!(state.drawings().is_empty());
    assert!(state.players().is_empty());
}

#[test]
fn moving_a_point_is_undoable() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();
    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("r1", 100.0),
        },
    );

    run(
        &mut controller,
        &mut state,
        AppCommand::MoveControlPoint {
            drawing_id: "r1".to_string(),
            point_id: "b".to_string(),
            position: CanvasPx::new(140.0, 120.0),
        },
    );
    let moved = state.drawing("r1").and_then(|d| d.point("b")).map(|p| p.position());
    assert_eq!(moved, Some(DVec2::new(140.0, 120.0)));

    run(&mut controller, &mut state, AppCommand::Undo);
    let restored = state.drawing("r1").and_then(|d| d.point("b")).map(|p| p.position());
    assert_eq!(restored, Some(DVec2::new(100.0, 150.0)));
}

#[test]
fn unknown_ids_change_nothing_and_commit_nothing() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();
    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("r1", 100.0),
        },
    );
    let history_len = state.history.len();

    run(
        &mut controller,
        &mut state,
        AppCommand::DeleteDrawing {
            drawing_id: "gibt-es-nicht".to_string(),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("r1", 999.0),
        },
    );

    assert_eq!(state.history.len(), history_len);
    assert_eq!(drawing_ids(&state), vec!["r1"]);
}

#[test]
fn moving_a_player_drags_its_anchored_route() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    let mut drawing = route("r1", 100.0);
    drawing.player_id = Some("wr".to_string());
    drawing.linked_point_id = Some("a".to_string());
    run(&mut controller, &mut state, AppCommand::AddDrawing { drawing });
    run(
        &mut controller,
        &mut state,
        AppCommand::AddPlayer {
            player: Player::new("wr", DVec2::new(100.0, 300.0)),
        },
    );

    run(
        &mut controller,
        &mut state,
        AppCommand::MovePlayer {
            player_id: "wr".to_string(),
            position: CanvasPx::new(120.0, 310.0),
        },
    );

    let anchor = state.drawing("r1").and_then(|d| d.point("a")).map(|p| p.position());
    assert_eq!(anchor, Some(DVec2::new(120.0, 310.0)));
    let tip = state.drawing("r1").and_then(|d| d.point("b")).map(|p| p.position());
    assert_eq!(tip, Some(DVec2::new(100.0, 150.0)));
}

#[test]
fn polyline_in_curve_mode_becomes_cubic_drawing() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawingFromPolyline {
            id: "freehand".to_string(),
            points: vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(50.0, 40.0),
                DVec2::new(100.0, 0.0),
            ],
            style: DrawingStyle {
                path_mode: PathMode::Curve,
                ..DrawingStyle::default()
            },
        },
    );

    let drawing = state.drawing("freehand").expect("Drawing angelegt");
    assert_eq!(drawing.segments.len(), 2);
    assert_eq!(state.history.len(), 1);
}

#[test]
fn view_commands_do_not_touch_history() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    run(
        &mut controller,
        &mut state,
        AppCommand::PanView {
            delta: ScreenDelta::new(30.0, -10.0),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppCommand::ZoomView {
            factor: 2.0,
            anchor: Some(ScreenPx::new(0.0, 0.0)),
        },
    );
    run(&mut controller, &mut state, AppCommand::ZoomIn);

    assert!(state.history.is_empty());
    assert!((state.view.zoom() - 2.4).abs() < 1e-9);
}

#[test]
fn invalid_zoom_factor_is_an_error() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    let result = controller.handle_command(
        &mut state,
        AppCommand::ZoomView {
            factor: 0.0,
            anchor: None,
        },
    );

    assert!(result.is_err());
    assert_eq!(state.view.zoom(), 1.0);
}

#[test]
fn linemen_are_editable_undoable_and_rendered() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    run(
        &mut controller,
        &mut state,
        AppCommand::AddLineman {
            lineman: LinemanPosition::new("c", DVec2::new(400.0, 320.0)),
        },
    );
    run(
        &mut controller,
        &mut state,
        AppCommand::MoveLineman {
            lineman_id: "c".to_string(),
            position: CanvasPx::new(410.0, 318.0),
        },
    );
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.lineman_positions[0].position(), DVec2::new(410.0, 318.0));

    let preview = build_preview(&state);
    assert!(preview.contains("data-lineman-id=\"c\""));

    run(&mut controller, &mut state, AppCommand::Undo);
    assert_eq!(state.lineman_positions[0].position(), DVec2::new(400.0, 320.0));

    run(&mut controller, &mut state, AppCommand::Redo);
    assert_eq!(state.lineman_positions[0].position(), DVec2::new(410.0, 318.0));

    // Unbekannter Lineman: keine Änderung, kein Eintrag
    run(
        &mut controller,
        &mut state,
        AppCommand::MoveLineman {
            lineman_id: "lg".to_string(),
            position: CanvasPx::new(0.0, 0.0),
        },
    );
    assert_eq!(state.history.len(), 2);
}

#[test]
fn clearing_an_empty_canvas_commits_nothing() {
    let mut controller = AppController::new();
    let mut state = EditorState::new();

    run(&mut controller, &mut state, AppCommand::ClearCanvas);
    assert!(state.history.is_empty());

    run(
        &mut controller,
        &mut state,
        AppCommand::AddDrawing {
            drawing: route("r1", 100.0),
        },
    );
    run(&mut controller, &mut state, AppCommand::ClearCanvas);
    run(&mut controller, &mut state, AppCommand::ClearCanvas);

    assert_eq!(state.history.len(), 2);
    assert!(state.drawings().is_empty());
}
