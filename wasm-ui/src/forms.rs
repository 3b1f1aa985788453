//! Form behaviors: delete confirmation, star ratings, ingredient
//! checklists and the validation gate.

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, warn};
use recipe_ui::markup::{
    DELETE_FORM, DELETE_MODAL, INGREDIENT_CHECKBOXES, INGREDIENT_ITEM, INGREDIENT_LABEL,
    MODAL_SHOW_EVENT, RATING, RATING_INPUTS, RATING_LABELS, RECIPE_ID_ATTR, VALIDATED_FORMS,
    WAS_VALIDATED,
};
use recipe_ui::{IngredientStyle, RatingPalette, SubmitGate, UiConfig, UiError, delete_action, star_colors};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement};

use crate::bootstrap;
use crate::page::{JsResultExt, Page, elements, set_style};

/// Point the delete form at the recipe whose trigger opened the modal.
pub fn bind_delete_modal(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    let Some(modal) = page.find(DELETE_MODAL)? else {
        debug!("no delete modal on this page");
        return Ok(());
    };

    let page = page.clone();
    let prefix = config.delete_action_prefix.clone();
    EventListener::new(&modal, MODAL_SHOW_EVENT, move |event| {
        if let Err(err) = retarget_delete_form(&page, &prefix, event) {
            warn!("could not prepare delete form: {}", err);
        }
    })
    .forget();
    Ok(())
}

fn retarget_delete_form(page: &Page, prefix: &str, event: &Event) -> Result<(), UiError> {
    let recipe_id = bootstrap::related_target(event)
        .and_then(|trigger| trigger.get_attribute(RECIPE_ID_ATTR));
    let Some(recipe_id) = recipe_id else {
        warn!("delete modal opened without a {} trigger", RECIPE_ID_ATTR);
        return Ok(());
    };
    let Some(form) = page.find(DELETE_FORM)? else {
        warn!("delete modal has no {} form", DELETE_FORM);
        return Ok(());
    };

    let action = delete_action(prefix, &recipe_id);
    form.set_attribute("action", &action).js()?;
    debug!("delete form action set to {}", action);
    Ok(())
}

/// Recolor a rating control's labels whenever one of its inputs changes.
pub fn bind_star_ratings(page: &Page, config: &UiConfig) -> Result<(), UiError> {
    for input in page.find_all(RATING_INPUTS)? {
        let palette = config.rating.clone();
        let target = input.clone();
        EventListener::new(&input, "change", move |_| {
            if let Err(err) = recolor_rating(&target, &palette) {
                warn!("could not update rating: {}", err);
            }
        })
        .forget();
    }
    Ok(())
}

fn recolor_rating(input: &Element, palette: &RatingPalette) -> Result<(), UiError> {
    let Some(input) = input.dyn_ref::<HtmlInputElement>() else {
        return Ok(());
    };
    let Some(control) = input.closest(RATING).js()? else {
        return Ok(());
    };

    let labels = elements(&control.query_selector_all(RATING_LABELS).js()?);
    let colors = star_colors(&input.value(), labels.len(), palette.max);
    for (label, color) in labels.iter().zip(colors) {
        set_style(label, "color", color.css(palette))?;
    }
    Ok(())
}

/// Strike through an ingredient while its checkbox is checked.
pub fn bind_ingredient_checklist(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    for checkbox in page.find_all(INGREDIENT_CHECKBOXES)? {
        let target = checkbox.clone();
        EventListener::new(&checkbox, "change", move |_| {
            if let Err(err) = restyle_ingredient(&target) {
                warn!("could not update ingredient: {}", err);
            }
        })
        .forget();
    }
    Ok(())
}

fn restyle_ingredient(checkbox: &Element) -> Result<(), UiError> {
    let Some(input) = checkbox.dyn_ref::<HtmlInputElement>() else {
        return Ok(());
    };
    let Some(row) = checkbox.closest(INGREDIENT_ITEM).js()? else {
        return Ok(());
    };

    let style = IngredientStyle::for_checked(input.checked());
    set_style(&row, "opacity", style.opacity)?;
    if let Some(label) = row.query_selector(INGREDIENT_LABEL).js()? {
        set_style(&label, "text-decoration", style.text_decoration)?;
    }
    Ok(())
}

/// Block submission of forms whose constraints fail, on every attempt.
pub fn bind_form_validation(page: &Page, _config: &UiConfig) -> Result<(), UiError> {
    for form in page.find_all(VALIDATED_FORMS)? {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let target = form.clone();
        EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                if SubmitGate::decide(target.check_validity()).blocks() {
                    event.prevent_default();
                    event.stop_propagation();
                }
                if let Err(err) = target.class_list().add_1(WAS_VALIDATED).js() {
                    warn!("could not mark form validated: {}", err);
                }
            },
        )
        .forget();
    }
    Ok(())
}
