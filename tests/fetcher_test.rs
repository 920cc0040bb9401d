use lingo_digest::fetcher;

const PARAGRAPH: &str = "The government announced a sweeping new economic policy on Monday, \
    promising broad support for small businesses across the country. Officials said the \
    program would expand access to credit, simplify licensing requirements, and reduce the \
    paperwork that has long burdened independent shops. Economists welcomed the move but \
    cautioned that the benefits would take months to reach the smallest firms, particularly \
    those in rural regions where banking services remain scarce.";

#[test]
fn extracts_main_text_from_article_markup() {
    let html = format!(
        "<html><head><title>Policy news</title></head><body><article><h1>Policy news</h1>\
         <p>{p}</p><p>{p}</p></article></body></html>",
        p = PARAGRAPH
    );

    let text = fetcher::extract_main_text(&html, "http://example.com/article")
        .expect("extraction should find the article body");
    assert!(text.contains("sweeping new economic policy"));
}

#[test]
fn extraction_yields_none_when_there_is_no_main_content() {
    assert!(fetcher::extract_main_text("", "http://example.com/").is_none());
    assert!(
        fetcher::extract_main_text("<html><head></head><body></body></html>", "http://example.com/")
            .is_none()
    );
}
