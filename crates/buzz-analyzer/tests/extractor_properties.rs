//! 추출기 불변식 속성 테스트.

use buzz_analyzer::{SymbolExtractor, DEFAULT_STOPLIST};
use proptest::prelude::*;

proptest! {
    /// 어떤 입력에 대해서도 추출된 심볼은 대문자 전용이며,
    /// 길이 범위 안에 있고, 스톱리스트에 없어야 한다.
    #[test]
    fn extracted_symbols_satisfy_invariants(text in "\\PC{0,200}") {
        let extractor = SymbolExtractor::new(1, 4);

        for symbol in extractor.extract(&text) {
            prop_assert!(symbol.chars().all(|c| c.is_ascii_uppercase()));
            prop_assert!(symbol.len() >= 1 && symbol.len() <= 4);
            prop_assert!(!DEFAULT_STOPLIST.contains(&symbol.as_str()));
        }
    }

    /// 추출은 결정적이다: 같은 입력이면 같은 출력.
    #[test]
    fn extraction_is_deterministic(text in "\\PC{0,200}") {
        let extractor = SymbolExtractor::new(1, 4);
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }

    /// 추출된 심볼은 모두 입력 텍스트의 부분 문자열이다.
    #[test]
    fn extracted_symbols_are_substrings(text in "\\PC{0,200}") {
        let extractor = SymbolExtractor::new(1, 4);

        for symbol in extractor.extract(&text) {
            prop_assert!(text.contains(&symbol));
        }
    }
}
