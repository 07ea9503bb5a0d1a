//! Signup form walkthrough
//!
//! Builds a document holding a signup form, binds a validator to it and
//! simulates a user: blurring an invalid field, correcting it, then
//! submitting. Run with `cargo run --example signup`.

use formgate::{Document, Element, FormEvent, FormValidator, ValidatorOptions};

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut doc = Document::new();
    let body = doc.create_root(Element::new("body"));
    let form = doc.create_element(body, Element::new("form").with_id("signup"));

    let email_group = doc.create_element(form, Element::new("div").with_class("form-group"));
    let email = doc.create_element(
        email_group,
        Element::new("input")
            .with_attr("name", "email")
            .with_attr("rules", "required|email"),
    );
    let email_message =
        doc.create_element(email_group, Element::new("span").with_class("form-message"));

    let password_group = doc.create_element(form, Element::new("div").with_class("form-group"));
    let password = doc.create_element(
        password_group,
        Element::new("input")
            .with_attr("type", "password")
            .with_attr("name", "password")
            .with_attr("rules", "required|min:6"),
    );
    doc.create_element(password_group, Element::new("span").with_class("form-message"));

    let options = ValidatorOptions::new().on_submit(|values| {
        println!(
            "submitted: {}",
            serde_json::to_string_pretty(&values).unwrap()
        );
    });
    let mut bound = FormValidator::new("#signup", options)
        .bind(&doc)
        .expect("signup form binds");

    // Leaving the email field empty trips `required`.
    bound.handle_event(&mut doc, FormEvent::Blur { target: email });
    println!("after blur: {:?}", doc.text(email_message));

    // Typing clears the error display.
    doc.element_mut(email).value = "user@example.com".to_string();
    bound.handle_event(&mut doc, FormEvent::Input { target: email });
    println!("after input: {:?}", doc.text(email_message));

    // A submit with a short password is blocked...
    doc.element_mut(password).value = "abc".to_string();
    bound.handle_event(&mut doc, FormEvent::Submit);

    // ...and goes through once every rule passes.
    doc.element_mut(password).value = "hunter22".to_string();
    bound.handle_event(&mut doc, FormEvent::Input { target: password });
    bound.handle_event(&mut doc, FormEvent::Submit);
}
