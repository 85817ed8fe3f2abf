use super::*;
use crate::catalog::{Catalog, ModelEntry};
use crate::config::Config;
use crate::tui::layout::{ScreenLayout, expand_tabs};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use rstest::rstest;

const WIDE: (u16, u16) = (160, 48);

fn create_test_app(width: u16, height: u16) -> App {
    let mut app = App::new(Config::default(), Catalog::builtin());
    app.resize(Rect::new(0, 0, width, height));
    app
}

fn draw(app: &App) -> Result<Buffer, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(app.frame_area.width, app.frame_area.height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(terminal.backend().buffer().clone())
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
        .collect()
}

fn region_text(buffer: &Buffer, area: Rect) -> String {
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .filter_map(|x| buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn buffer_to_string(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wide glyphs leave padding cells behind; compare without spaces.
fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Text the code viewport should show on `row` for the current scroll offsets.
fn expected_code_row(app: &App, row: u16) -> String {
    let viewport = app.code_viewport();
    app.selected_entry()
        .code
        .lines()
        .nth(app.code_scroll + usize::from(row))
        .map(|line| {
            expand_tabs(line)
                .chars()
                .skip(app.code_hscroll)
                .take(usize::from(viewport.width))
                .collect::<String>()
        })
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

fn assert_code_rows_match(buffer: &Buffer, app: &App) {
    let viewport = app.code_viewport();
    for row in 0..viewport.height {
        let shown = row_text(buffer, viewport.y + row)
            .chars()
            .skip(usize::from(viewport.x))
            .take(usize::from(viewport.width))
            .collect::<String>();
        assert_eq!(
            shown.trim_end(),
            expected_code_row(app, row),
            "{} row {row} at scroll ({}, {})",
            app.selected_key(),
            app.code_scroll,
            app.code_hscroll
        );
    }
}

fn assert_shows_entry(buffer: &Buffer, app: &App, entry: &ModelEntry) {
    let layout = app.layout();
    let detail = region_text(buffer, layout.detail.card);
    assert!(detail.contains(entry.name), "detail missing name {}", entry.name);
    assert!(detail.contains(entry.paper), "detail missing paper {}", entry.paper);
    assert!(
        compact(&detail).contains(&compact(entry.status)),
        "detail missing status for {}",
        entry.key
    );
    assert_eq!(app.selected_key(), entry.key);
    assert_code_rows_match(buffer, app);
}

fn selected_marker_count(buffer: &Buffer, layout: &ScreenLayout) -> usize {
    region_text(buffer, layout.selector)
        .matches(main_layout::SELECTED_MARKER.trim_end())
        .count()
}

#[test]
fn test_initial_render_shows_default_entry() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(WIDE.0, WIDE.1);
    let buffer = draw(&app)?;
    let layout = app.layout();

    assert_shows_entry(&buffer, &app, app.catalog.default_entry());
    let detail = region_text(&buffer, layout.detail.card);
    assert!(detail.contains("ResNet"));
    assert!(detail.contains("He et al., CVPR 2016"));
    assert!(detail.contains("class BasicBlock(nn.Module):"));
    Ok(())
}

#[rstest]
#[case("resnet")]
#[case("vgg")]
#[case("alexnet")]
#[case("lenet")]
#[case("transformer")]
#[case("bert")]
#[case("gan")]
#[case("unet")]
fn test_selecting_key_renders_its_fields(
    #[case] key: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(WIDE.0, WIDE.1);
    app.select_key(key)?;

    let buffer = draw(&app)?;
    let layout = app.layout();
    let entry = app.catalog.lookup(key)?;

    assert_shows_entry(&buffer, &app, entry);
    assert_eq!(selected_marker_count(&buffer, &layout), 1);

    let idx = app.catalog.index_of(key).unwrap_or_default();
    let cell = region_text(&buffer, layout.cells[idx]);
    assert!(cell.contains(main_layout::SELECTED_MARKER.trim_end()));
    assert!(cell.contains(entry.name));
    Ok(())
}

#[test]
fn test_every_control_shows_name_and_status() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(WIDE.0, WIDE.1);
    let buffer = draw(&app)?;
    let layout = app.layout();

    for (entry, cell) in app.catalog.entries().iter().zip(layout.cells.iter()) {
        let text = region_text(&buffer, *cell);
        assert!(text.contains(entry.name), "{} not in its control", entry.name);
        assert!(compact(&text).contains(&compact(entry.status)));
    }
    Ok(())
}

#[test]
fn test_exactly_one_control_selected_after_navigation() -> Result<(), Box<dyn std::error::Error>>
{
    let mut app = create_test_app(WIDE.0, WIDE.1);
    for _ in 0..app.catalog.len() + 3 {
        app.select_next();
        let buffer = draw(&app)?;
        assert_eq!(selected_marker_count(&buffer, &app.layout()), 1);
    }
    Ok(())
}

#[test]
fn test_reselecting_current_key_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(WIDE.0, WIDE.1);
    app.scroll_down(4);
    let before = draw(&app)?;

    assert!(!app.select_key(app.selected_key())?);
    let after = draw(&app)?;

    assert_eq!(buffer_to_string(&before), buffer_to_string(&after));
    Ok(())
}

#[test]
fn test_click_on_vgg_updates_detail() -> Result<(), Box<dyn std::error::Error>> {
    use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    let mut app = create_test_app(WIDE.0, WIDE.1);
    let vgg_cell = app.layout().cells[app.catalog.index_of("vgg").unwrap_or_default()];

    crate::tui::handle_mouse_event(
        &mut app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: vgg_cell.x + 2,
            row: vgg_cell.y,
            modifiers: KeyModifiers::NONE,
        },
    );

    let buffer = draw(&app)?;
    let layout = app.layout();
    assert_eq!(app.selected_key(), "vgg");
    assert_shows_entry(&buffer, &app, app.catalog.lookup("vgg")?);
    assert!(region_text(&buffer, layout.cells[1]).contains(main_layout::SELECTED_MARKER.trim_end()));
    assert!(!region_text(&buffer, layout.cells[0]).contains(main_layout::SELECTED_MARKER.trim_end()));
    Ok(())
}

#[test]
fn test_header_and_footer_are_static() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(WIDE.0, WIDE.1);
    let layout = app.layout();
    let first = draw(&app)?;
    app.select_key("gan")?;
    let second = draw(&app)?;

    for buffer in [&first, &second] {
        let header = compact(&region_text(buffer, layout.header));
        assert!(header.contains(main_layout::TITLE));
        assert!(header.contains(&compact(main_layout::SUBTITLE)));

        let footer = compact(&region_text(buffer, layout.footer));
        assert!(footer.contains("已复现模型"));
        assert!(footer.contains("8个经典深度学习模型"));
        assert!(footer.contains("PyTorch完整实现"));
        assert!(footer.contains("包含训练和推理代码"));
    }

    assert_eq!(
        region_text(&first, layout.header),
        region_text(&second, layout.header)
    );
    assert_eq!(
        region_text(&first, layout.footer),
        region_text(&second, layout.footer)
    );
    Ok(())
}

#[test]
fn test_detail_heading_and_tip() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(WIDE.0, WIDE.1);
    let buffer = draw(&app)?;
    let layout = app.layout();

    let heading = compact(&region_text(&buffer, layout.detail.heading));
    assert!(heading.contains(main_layout::CODE_HEADING));

    let tip = compact(&region_text(&buffer, layout.detail.tip));
    assert!(tip.contains("提示"));
    assert!(tip.contains("可直接复制运行"));
    Ok(())
}

#[test]
fn test_scrolled_code_shows_tail() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(120, 40);
    app.scroll_to_bottom();
    assert!(app.code_scroll > 0);

    let buffer = draw(&app)?;
    let code = region_text(&buffer, app.layout().detail.code);
    assert!(code.contains("model = resnet18()"));
    assert!(!code.contains("import torch.nn as nn"));
    Ok(())
}

#[rstest]
#[case(80, 24)]
#[case(120, 40)]
fn test_every_code_line_can_be_read_in_full(
    #[case] width: u16,
    #[case] height: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(width, height);
    let keys: Vec<&str> = app.catalog.keys().collect();

    for key in keys {
        app.select_key(key)?;
        let viewport = app.code_viewport();
        let view_width = usize::from(viewport.width);
        let lines: Vec<String> = app.selected_entry().code.lines().map(expand_tabs).collect();

        for (idx, line) in lines.iter().enumerate() {
            app.code_scroll = idx.min(app.max_code_scroll());
            let row = u16::try_from(idx - app.code_scroll)?;
            let len = line.chars().count();
            let last_offset = len.saturating_sub(view_width);

            let mut seen = vec![false; len];
            let offsets = (0..last_offset).step_by(view_width.max(1)).chain([last_offset]);
            for offset in offsets {
                assert!(offset <= app.max_code_hscroll(), "{key} line {idx} out of reach");
                app.code_hscroll = offset;
                let buffer = draw(&app)?;
                let shown: String = row_text(&buffer, viewport.y + row)
                    .chars()
                    .skip(usize::from(viewport.x))
                    .take(view_width)
                    .collect();
                let expected: String = line.chars().skip(offset).take(view_width).collect();
                assert_eq!(shown.trim_end(), expected.trim_end(), "{key} line {idx}");
                for flag in seen.iter_mut().skip(offset).take(view_width) {
                    *flag = true;
                }
            }
            assert!(seen.iter().all(|s| *s), "{key} line {idx} not fully shown");
        }
        app.code_hscroll = 0;
    }
    Ok(())
}

#[test]
fn test_long_line_scrolls_into_view_at_standard_size() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(80, 24);
    app.select_key("transformer")?;

    let viewport = app.code_viewport();
    let (idx, longest) = app
        .selected_entry()
        .code
        .lines()
        .enumerate()
        .max_by_key(|(_, line)| line.len())
        .ok_or("empty code")?;
    assert!(longest.len() > usize::from(viewport.width));

    let before = region_text(&draw(&app)?, viewport);
    assert!(!before.contains(longest.trim()));

    app.code_scroll = idx.min(app.max_code_scroll());
    tui_keys(&mut app, ratatui::crossterm::event::KeyCode::Char('>'), 10);
    assert_eq!(app.code_hscroll, app.max_code_hscroll());

    let buffer = draw(&app)?;
    let row = u16::try_from(idx - app.code_scroll)?;
    let shown: String = row_text(&buffer, viewport.y + row)
        .chars()
        .skip(usize::from(viewport.x))
        .take(usize::from(viewport.width))
        .collect();
    assert!(longest.trim_end().ends_with(shown.trim()), "{shown:?}");
    assert_code_rows_match(&buffer, &app);

    let heading = region_text(&buffer, app.layout().detail.heading);
    assert!(heading.contains("[</>] col"));
    Ok(())
}

fn tui_keys(app: &mut App, code: ratatui::crossterm::event::KeyCode, times: usize) {
    for _ in 0..times {
        crate::tui::handle_key_event(
            app,
            code,
            ratatui::crossterm::event::KeyModifiers::NONE,
        );
    }
}

#[test]
fn test_code_lines_are_verbatim() {
    let code = "def f(x):\n\treturn x  # keep\n\n    pass";
    let lines: Vec<String> = main_layout::code_lines(code)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "def f(x):".to_string(),
            "    return x  # keep".to_string(),
            String::new(),
            "    pass".to_string(),
        ]
    );
}

#[test]
fn test_selector_cell_lines_by_height() {
    let entry = Catalog::builtin().default_entry().to_owned();

    let tall = main_layout::selector_cell_lines(&entry, true, 2);
    assert_eq!(tall.len(), 2);
    assert_eq!(tall[0].to_string(), "▶ ResNet");

    let compact_lines = main_layout::selector_cell_lines(&entry, false, 1);
    assert_eq!(compact_lines.len(), 1);
    assert!(compact_lines[0].to_string().starts_with("  ResNet  "));
}

#[test]
fn test_help_overlay_lists_bindings() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(120, 40);
    app.enter_mode(Mode::Help);

    let buffer = draw(&app)?;
    let content = buffer_to_string(&buffer);
    assert!(content.contains("Keybindings"));
    assert!(content.contains("Next model"));
    assert!(content.contains("Scroll to bottom"));
    assert!(content.contains("Scroll code right"));
    assert!(content.contains("shift+wheel: scroll code sideways"));
    assert!(content.contains("Any key closes"));
    Ok(())
}

#[rstest]
#[case(80, 24)]
#[case(60, 16)]
#[case(20, 5)]
fn test_small_terminals_render(
    #[case] width: u16,
    #[case] height: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = create_test_app(width, height);
    app.scroll_to_bottom();
    let buffer = draw(&app)?;
    assert_eq!(buffer.area.width, width);
    assert!(selected_marker_count(&buffer, &app.layout()) <= 1);
    Ok(())
}

#[test]
fn test_standard_terminal_shows_selection() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(80, 24);
    let buffer = draw(&app)?;
    let layout = app.layout();

    assert_eq!(layout.columns, 2);
    assert_eq!(selected_marker_count(&buffer, &layout), 1);
    assert!(region_text(&buffer, layout.detail.card).contains("ResNet"));
    Ok(())
}
