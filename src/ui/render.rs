use crate::ui::alert::render_alert;
use crate::ui::app::{App, Screen};
use crate::ui::categories::{render_category_form, render_category_list};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::products::{render_product_form, render_product_list};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.screen()), header);

    match app.screen() {
        Screen::Products => render_product_list(frame, body, app.product_list()),
        Screen::ProductCreate | Screen::ProductEdit(_) => {
            render_product_form(frame, body, app.product_form());
        }
        Screen::Categories => {
            render_category_list(frame, body, app.category_list(), app.host());
        }
        Screen::CategoryCreate | Screen::CategoryEdit(_) => {
            render_category_form(frame, body, app.category_form(), app.host());
        }
    }

    frame.render_widget(
        Footer::new().widget(footer, app.screen(), app.last_notice()),
        footer,
    );

    if let Some(message) = app.alert() {
        render_alert(frame, body, message);
    }
}
