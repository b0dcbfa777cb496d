use folio::{Article, Author, Edition, Highlight};

/// A paragraph of roughly `chars` visible characters.
pub fn paragraph(chars: usize) -> String {
    let words = "a razão não se curva diante de dogmas ".repeat(chars / 38 + 1);
    let text: String = words.chars().take(chars).collect();
    format!("<p>{}</p>", text.trim_end())
}

pub fn body(paragraphs: usize, chars: usize) -> String {
    (0..paragraphs).map(|_| paragraph(chars)).collect::<Vec<_>>().join("\n")
}

/// The stock test edition: an editorial, a two-column article, a poem
/// and an article whose type has no style.
pub fn sample_edition() -> Edition {
    Edition::new(12, "capa.jpg", "contracapa.png")
        .with_subtitle("Edição nº 12 – Março de 2025")
        .with_logo("logo.png")
        .with_highlight(Highlight::new("O método científico"))
        .with_highlight(Highlight::new("Versos livres").with_page_reference("pág. 99"))
        .with_article(
            Article::new("Carta ao leitor", "Editorial", body(2, 300))
                .with_author(Author::new("Equipe editorial")),
        )
        .with_article(
            Article::new("O método científico", "Divulgação científica", body(12, 900))
                .with_author(Author {
                    name: "Ana Souza".to_string(),
                    bio: Some("Física e divulgadora.".to_string()),
                    photo_url: Some("fotos/ana.jpg".into()),
                }),
        )
        .with_article(Article::new("Versos livres", "Poesia", body(3, 120)))
        .with_article(Article::new("Fé e Razão", "Ensaio", body(4, 600)))
}

pub fn empty_edition() -> Edition {
    Edition::new(1, "capa.jpg", "contracapa.png")
}
