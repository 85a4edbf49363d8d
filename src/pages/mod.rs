use axum::response::Html;

/// Shared shell for the server-rendered pages. The deployed site fronts
/// these with a static bundle; the server keeps rendering them so the site
/// stays reachable when the bundle is missing.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Meridian Consulting</title>\n\
         </head>\n\
         <body>\n\
         <nav>\n\
         <a href=\"/\">Home</a>\n\
         <a href=\"/services\">Services</a>\n\
         <a href=\"/contact\">Contact</a>\n\
         <a href=\"/client-portal\">Client Portal</a>\n\
         </nav>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

/// GET / - landing page
pub async fn home() -> Html<String> {
    Html(page(
        "Home",
        "<h1>Meridian Consulting</h1>\n\
         <p>Operations and software consulting for growing teams.</p>",
    ))
}

/// GET /services - service line overview
pub async fn services() -> Html<String> {
    Html(page(
        "Services",
        "<h1>Our Services</h1>\n\
         <ul>\n\
         <li>Engineering leadership and delivery</li>\n\
         <li>Back-office automation</li>\n\
         <li>Data and reporting pipelines</li>\n\
         </ul>",
    ))
}

/// GET /contact - contact details
pub async fn contact() -> Html<String> {
    Html(page(
        "Contact",
        "<h1>Contact</h1>\n\
         <p>Write to <a href=\"mailto:hello@meridian.example.com\">hello@meridian.example.com</a> \
         and we will get back to you within one business day.</p>",
    ))
}

/// GET /client-portal - interactive portal demo
///
/// Everything shown here is fed by the static dataset behind `/demo`; the
/// page works without an account and the data resets on every visit.
pub async fn client_portal() -> Html<String> {
    Html(page(
        "Client Portal",
        "<h1>Client Portal</h1>\n\
         <p>Demo workspace with sample clients, projects and invoices.</p>\n\
         <div id=\"portal\" data-demo-endpoint=\"/demo\"></div>",
    ))
}
