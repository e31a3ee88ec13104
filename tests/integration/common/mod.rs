//! Shared fixtures and mock helpers for the integration tests
#![allow(dead_code)]

use litsearch_proxy::{Client, ClientConfig};
use std::time::Duration;
use wiremock::MockServer;

/// ESearch answer with two PMIDs
pub const ESEARCH_TWO_IDS: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "2",
        "retmax": "2",
        "retstart": "0",
        "idlist": ["31978945", "25760099"],
        "translationset": [],
        "querytranslation": "coronavirus[All Fields]"
    }
}"#;

/// ESearch answer with no hits
pub const ESEARCH_EMPTY: &str = r#"{
    "header": {"type": "esearch", "version": "0.3"},
    "esearchresult": {
        "count": "0",
        "retmax": "0",
        "retstart": "0",
        "idlist": [],
        "translationset": [],
        "querytranslation": ""
    }
}"#;

/// EFetch answer for the two PMIDs in [`ESEARCH_TWO_IDS`]
pub const EFETCH_TWO_ARTICLES: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation Status="MEDLINE" Owner="NLM">
            <PMID Version="1">31978945</PMID>
            <Article PubModel="Print-Electronic">
                <Journal>
                    <JournalIssue CitedMedium="Internet">
                        <PubDate><Year>2020</Year><Month>Mar</Month></PubDate>
                    </JournalIssue>
                    <Title>Nature</Title>
                </Journal>
                <ArticleTitle>A new coronavirus associated with human respiratory disease in China.</ArticleTitle>
                <Abstract>
                    <AbstractText>Emerging infectious diseases, such as severe acute respiratory syndrome (SARS) and Zika virus disease, present a major threat to public health.</AbstractText>
                </Abstract>
                <AuthorList CompleteYN="Y">
                    <Author><LastName>Wu</LastName><ForeName>Fan</ForeName><Initials>F</Initials></Author>
                    <Author><LastName>Zhao</LastName><ForeName>Su</ForeName><Initials>S</Initials></Author>
                    <Author><LastName>Yu</LastName><ForeName>Bin</ForeName><Initials>B</Initials></Author>
                    <Author><LastName>Chen</LastName><ForeName>Yan-Mei</ForeName><Initials>YM</Initials></Author>
                    <Author><LastName>Wang</LastName><ForeName>Wen</ForeName><Initials>W</Initials></Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
        <PubmedData>
            <ArticleIdList>
                <ArticleId IdType="pubmed">31978945</ArticleId>
                <ArticleId IdType="pmc">PMC7094943</ArticleId>
                <ArticleId IdType="doi">10.1038/s41586-020-2008-3</ArticleId>
            </ArticleIdList>
        </PubmedData>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">25760099</PMID>
            <Article>
                <Journal>
                    <JournalIssue><PubDate><Year>2014</Year></PubDate></JournalIssue>
                    <Title>Science</Title>
                </Journal>
                <ArticleTitle>The new frontier of genome engineering with CRISPR-Cas9.</ArticleTitle>
                <AuthorList>
                    <Author><LastName>Doudna</LastName><ForeName>Jennifer A</ForeName><Initials>JA</Initials></Author>
                    <Author><LastName>Charpentier</LastName><ForeName>Emmanuelle</ForeName><Initials>E</Initials></Author>
                </AuthorList>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

/// EFetch answer where the middle record has no PMID
pub const EFETCH_WITH_MALFORMED_RECORD: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">31978945</PMID>
            <Article><ArticleTitle>First valid record</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <Article><ArticleTitle>Record without identifier</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">25760099</PMID>
            <Article><ArticleTitle>Second valid record</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

/// EFetch answer whose middle record carries MathML and an unreadable entity
pub const EFETCH_WITH_MIXED_CONTENT_RECORDS: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">31978945</PMID>
            <Article><ArticleTitle>First valid record</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">30000001</PMID>
            <Article>
                <ArticleTitle>Dose response of <mml:math xmlns:mml="http://www.w3.org/1998/Math/MathML"><mml:mi>k</mml:mi></mml:math> in mice</ArticleTitle>
            </Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">30000002</PMID>
            <Article><ArticleTitle>Broken &notanentity; title</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
    <PubmedArticle>
        <MedlineCitation>
            <PMID Version="1">25760099</PMID>
            <Article><ArticleTitle>Second valid record</ArticleTitle></Article>
        </MedlineCitation>
    </PubmedArticle>
</PubmedArticleSet>"#;

/// Europe PMC search answer with a journal article and a DOI-only preprint
pub const EPMC_TWO_RESULTS: &str = r#"{
    "version": "6.9",
    "hitCount": 2,
    "request": {"queryString": "malaria vaccine", "resultType": "lite", "pageSize": 10},
    "resultList": {
        "result": [
            {
                "id": "34000000",
                "source": "MED",
                "pmid": "34000000",
                "pmcid": "PMC8000000",
                "doi": "10.1016/S0140-6736(21)00943-0",
                "title": "Efficacy of a low-dose candidate malaria vaccine.",
                "authorString": "Datoo MS, Natama MH, Some A, Traore O, Rouamba T.",
                "journalTitle": "Lancet",
                "pubYear": "2021"
            },
            {
                "id": "PPR400000",
                "source": "PPR",
                "doi": "10.1101/2022.01.01.22268000",
                "title": "A preprint on malaria transmission",
                "authorString": "Smith J, Doe A.",
                "pubYear": "2022"
            }
        ]
    }
}"#;

/// Europe PMC search answer where the second record is not a valid record
pub const EPMC_WITH_MALFORMED_RECORD: &str = r#"{
    "hitCount": 3,
    "resultList": {
        "result": [
            {"pmid": "1", "title": "First valid record", "pubYear": "2020"},
            {"pmid": "2", "title": ["not", "a", "string"]},
            {"pmid": "3", "title": "Second valid record", "pubYear": "2021"}
        ]
    }
}"#;

/// Europe PMC search answer with no hits
pub const EPMC_EMPTY: &str = r#"{
    "version": "6.9",
    "hitCount": 0,
    "request": {"queryString": "zzzxxyy", "resultType": "lite"},
    "resultList": {"result": []}
}"#;

/// Client whose providers both point at mock servers
pub fn create_mock_client(pubmed: &MockServer, europe_pmc: &MockServer) -> Client {
    let config = ClientConfig::new()
        .with_pubmed_base_url(pubmed.uri())
        .with_europe_pmc_base_url(europe_pmc.uri())
        .with_pubmed_timeout(Duration::from_secs(2))
        .with_europe_pmc_timeout(Duration::from_secs(2));

    Client::with_config(config).expect("client should build")
}
