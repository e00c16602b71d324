#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{ Arc, Mutex };
    use tokio::sync::Notify;

    use crate::errors::{ PaperPilotError, PaperPilotResult };
    use crate::implementations::input_collector::InputCollector;
    use crate::implementations::pipeline::{ PaperPilot, ResultsView };
    use crate::models::analysis::{ AnalysisResult, StoredAnalysis };
    use crate::models::submission::Submission;
    use crate::tests::sample_result;
    use crate::traits::analysis_service::AnalysisService;
    use crate::traits::result_store::ResultStore;

    /// Scripted stand-in for the analysis service
    #[derive(Default)]
    struct FakeService {
        fail_with: Mutex<Option<PaperPilotError>>,
        gate: Option<Arc<Notify>>,
        calls: Mutex<Vec<Submission>>,
        audio: HashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl AnalysisService for FakeService {
        async fn analyze(&self, submission: &Submission) -> PaperPilotResult<AnalysisResult> {
            self.calls.lock().unwrap().push(submission.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if let Some(err) = self.fail_with.lock().unwrap().take() {
                return Err(err);
            }
            Ok(sample_result())
        }

        async fn fetch_audio(&self, filename: &str) -> PaperPilotResult<Vec<u8>> {
            self.audio
                .get(filename)
                .cloned()
                .ok_or_else(|| PaperPilotError::AudioNotFound(filename.to_string()))
        }

        fn audio_url(&self, filename: &str) -> String {
            format!("http://fake/audio/{}", filename)
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        slot: Mutex<Option<StoredAnalysis>>,
    }

    impl ResultStore for MemoryStore {
        fn save(&self, result: &AnalysisResult) -> PaperPilotResult<StoredAnalysis> {
            let stored = StoredAnalysis::now(result.clone());
            *self.slot.lock().unwrap() = Some(stored.clone());
            Ok(stored)
        }

        fn load(&self) -> PaperPilotResult<StoredAnalysis> {
            self.slot.lock().unwrap().clone().ok_or(PaperPilotError::NoStoredResult)
        }

        fn clear(&self) -> PaperPilotResult<()> {
            *self.slot.lock().unwrap() = None;
            Ok(())
        }
    }

    /// A slot whose reads always fail with the given error
    struct BrokenStore(fn() -> PaperPilotError);

    impl ResultStore for BrokenStore {
        fn save(&self, result: &AnalysisResult) -> PaperPilotResult<StoredAnalysis> {
            Ok(StoredAnalysis::now(result.clone()))
        }

        fn load(&self) -> PaperPilotResult<StoredAnalysis> {
            Err((self.0)())
        }

        fn clear(&self) -> PaperPilotResult<()> {
            Ok(())
        }
    }

    fn doi_input() -> InputCollector {
        let mut collector = InputCollector::new();
        collector.set_dois("10.1038/nature12373");
        collector
    }

    #[tokio::test]
    async fn submit_stores_the_result() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());

        let stored = pilot.submit(&doi_input()).await.unwrap();

        assert_eq!(stored.result, sample_result());
        assert_eq!(pilot.latest().unwrap(), stored);
        assert!(!pilot.is_busy());
        assert_eq!(pilot.service().calls.lock().unwrap()[0].dois, vec!["10.1038/nature12373"]);
    }

    #[tokio::test]
    async fn empty_input_never_reaches_the_service() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());

        let err = pilot.submit(&InputCollector::new()).await.unwrap_err();

        assert!(matches!(err, PaperPilotError::MissingInput));
        assert!(pilot.service().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_previous_result() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());
        let first = pilot.submit(&doi_input()).await.unwrap();

        *pilot.service().fail_with.lock().unwrap() = Some(PaperPilotError::Timeout(300));
        let err = pilot.submit(&doi_input()).await.unwrap_err();

        assert!(matches!(err, PaperPilotError::Timeout(300)));
        assert_eq!(pilot.latest().unwrap(), first);
        assert!(!pilot.is_busy());
    }

    #[tokio::test]
    async fn no_result_until_first_submit() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());
        assert!(matches!(pilot.latest(), Err(PaperPilotError::NoStoredResult)));

        pilot.submit(&doi_input()).await.unwrap();
        pilot.clear().unwrap();
        assert!(matches!(pilot.latest(), Err(PaperPilotError::NoStoredResult)));
    }

    #[tokio::test]
    async fn one_request_at_a_time() {
        let gate = Arc::new(Notify::new());
        let service = FakeService {
            gate: Some(gate.clone()),
            ..FakeService::default()
        };
        let pilot = PaperPilot::new(service, MemoryStore::default());
        let input = doi_input();

        let first = pilot.submit(&input);
        let second = async {
            // Let the first request get going before trying another
            while !pilot.is_busy() {
                tokio::task::yield_now().await;
            }
            let outcome = pilot.submit(&input).await;
            gate.notify_one();
            outcome
        };

        let (first, second) = tokio::join!(first, second);

        assert!(first.is_ok());
        assert!(matches!(second, Err(PaperPilotError::RequestInFlight)));
        assert_eq!(pilot.service().calls.lock().unwrap().len(), 1);
        assert!(!pilot.is_busy());
    }

    #[tokio::test]
    async fn downloads_available_audio() {
        let mut audio = HashMap::new();
        audio.insert("final_synthesis.mp3".to_string(), b"podcast".to_vec());
        let service = FakeService {
            audio,
            ..FakeService::default()
        };
        let pilot = PaperPilot::new(service, MemoryStore::default());
        pilot.submit(&doi_input()).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("audio");

        // attention.mp3 is listed in the result but gone from the server
        let saved = pilot.download_all(&target).await.unwrap();

        assert_eq!(saved, vec![target.join("final_synthesis.mp3")]);
        assert_eq!(std::fs::read(&saved[0]).unwrap(), b"podcast");
    }

    #[tokio::test]
    async fn refuses_paths_as_audio_names() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());
        let dir = tempfile::tempdir().unwrap();

        let err = pilot.download_audio("../../.bashrc", dir.path()).await.unwrap_err();
        assert!(matches!(err, PaperPilotError::InvalidAudioName(_)));
    }

    #[tokio::test]
    async fn download_all_needs_a_result() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());
        let dir = tempfile::tempdir().unwrap();

        let err = pilot.download_all(dir.path()).await.unwrap_err();
        assert!(matches!(err, PaperPilotError::NoStoredResult));
    }

    fn service_with_audio(names: &[&str]) -> FakeService {
        let audio = names
            .iter()
            .map(|name| (name.to_string(), name.as_bytes().to_vec()))
            .collect();
        FakeService {
            audio,
            ..FakeService::default()
        }
    }

    fn store_with_audio(paper_audio: &str) -> MemoryStore {
        let mut result = sample_result();
        result.papers[0].audio_file = Some(paper_audio.to_string());
        let store = MemoryStore::default();
        store.save(&result).unwrap();
        store
    }

    #[tokio::test]
    async fn dots_inside_audio_names_are_downloaded() {
        // Names derived from truncated URLs can carry a double dot
        let name = "example.com_papers_v2_draft..mp3";
        let pilot = PaperPilot::new(
            service_with_audio(&[name, "final_synthesis.mp3"]),
            store_with_audio(name)
        );
        let dir = tempfile::tempdir().unwrap();

        let saved = pilot.download_all(dir.path()).await.unwrap();

        assert_eq!(saved, vec![dir.path().join(name), dir.path().join("final_synthesis.mp3")]);
        assert_eq!(std::fs::read(&saved[0]).unwrap(), name.as_bytes());
    }

    #[tokio::test]
    async fn unusable_audio_name_does_not_stop_the_batch() {
        let pilot = PaperPilot::new(
            service_with_audio(&["a/b.mp3", "final_synthesis.mp3"]),
            store_with_audio("a/b.mp3")
        );
        let dir = tempfile::tempdir().unwrap();

        let saved = pilot.download_all(dir.path()).await.unwrap();

        assert_eq!(saved, vec![dir.path().join("final_synthesis.mp3")]);
        assert!(!dir.path().join("a").exists());
    }

    #[tokio::test]
    async fn results_view_shows_stored_result() {
        let pilot = PaperPilot::new(FakeService::default(), MemoryStore::default());
        let stored = pilot.submit(&doi_input()).await.unwrap();

        match pilot.latest_or_redirect().unwrap() {
            ResultsView::Ready(shown) => assert_eq!(shown, stored),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn results_view_redirects_when_nothing_usable_is_stored() {
        let empty = PaperPilot::new(FakeService::default(), MemoryStore::default());
        assert!(
            matches!(
                empty.latest_or_redirect(),
                Ok(ResultsView::Redirect(PaperPilotError::NoStoredResult))
            )
        );

        let corrupt = PaperPilot::new(
            FakeService::default(),
            BrokenStore(|| PaperPilotError::StoredResultInvalid {
                path: "results.json".into(),
                reason: "expected value at line 1".to_string(),
            })
        );
        assert!(
            matches!(
                corrupt.latest_or_redirect(),
                Ok(ResultsView::Redirect(PaperPilotError::StoredResultInvalid { .. }))
            )
        );
    }

    #[test]
    fn results_view_propagates_io_failures() {
        let pilot = PaperPilot::new(
            FakeService::default(),
            BrokenStore(|| {
                PaperPilotError::Io(
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
                )
            })
        );

        assert!(matches!(pilot.latest_or_redirect(), Err(PaperPilotError::Io(_))));
    }
}
