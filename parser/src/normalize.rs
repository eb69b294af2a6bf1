use crate::ParserOptions;

pub fn normalize(text: &str, options: &ParserOptions) -> String {
    let lowered = text.to_lowercase();
    if !options.fold_accents {
        return lowered;
    }
    lowered.chars().map(fold_vowel).collect()
}

// ñ is a letter of its own and stays untouched.
fn fold_vowel(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        c => c,
    }
}
