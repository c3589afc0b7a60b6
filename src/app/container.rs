use std::sync::Arc;

use crate::adapters::{
    FsLocalAdapter, MkvmergeReader, MkvpropeditWriter, ToolRunner, TracingReportAdapter,
};
use crate::app::rename_interactor::RenameInteractor;
use crate::config_initialization::AppSettings;
use crate::ports::{ReaderPort, ReportPort, WriterPort};

pub trait AppContainer: Send + Sync {
    fn rename_interactor(&self) -> Arc<RenameInteractor>;
    fn input_discovery(&self) -> Arc<FsLocalAdapter>;
}

pub struct DefaultAppContainer {
    rename_interactor: Arc<RenameInteractor>,
    input_discovery: Arc<FsLocalAdapter>,
}

impl DefaultAppContainer {
    pub fn new(settings: &AppSettings) -> Self {
        let reader_port = Arc::new(MkvmergeReader::new(ToolRunner::new(
            settings.mkvmerge_path.clone(),
            settings.read_timeout,
        )));
        let writer_port = Arc::new(MkvpropeditWriter::new(ToolRunner::new(
            settings.mkvpropedit_path.clone(),
            settings.write_timeout,
        )));
        let report_port = Arc::new(TracingReportAdapter::new());

        let rename_interactor = Arc::new(RenameInteractor::new(
            reader_port as Arc<dyn ReaderPort>,
            writer_port as Arc<dyn WriterPort>,
            report_port as Arc<dyn ReportPort>,
            settings.max_concurrent_writes,
        ));

        let input_discovery = Arc::new(FsLocalAdapter::new(
            settings.container_extension.clone(),
        ));

        Self {
            rename_interactor,
            input_discovery,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn rename_interactor(&self) -> Arc<RenameInteractor> {
        Arc::clone(&self.rename_interactor)
    }

    fn input_discovery(&self) -> Arc<FsLocalAdapter> {
        Arc::clone(&self.input_discovery)
    }
}
